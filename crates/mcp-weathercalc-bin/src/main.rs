use anyhow::Result;
use clap::Parser;
use mcp_weathercalc_core::{CoreHandler, ServerConfig};
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod catalog;
mod cli;
use cli::{Cli, Commands, ShowCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("mcp_weathercalc_core=info,mcp_weathercalc_bin=info,info")
    });

    fmt()
        .with_ansi(std::io::stderr().is_terminal()) // Only use ANSI colors if stderr is a TTY
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stdio { name, version } => {
            info!(%name, %version, "Starting MCP server with stdio transport");
            mcp_weathercalc_core::run_stdio_server(ServerConfig::new(name, version)).await?;
            Ok(())
        }
        Commands::Test => mcp_weathercalc_core::self_test().await,
        Commands::Show { command } => {
            let handler = CoreHandler::new();
            match command {
                ShowCommands::Tools { name } => catalog::show_tools(&name),
                ShowCommands::Resources => catalog::show_resources(&handler),
                ShowCommands::Prompts => catalog::show_prompts(&handler),
                ShowCommands::Schema { tool } => catalog::show_schema(&tool)?,
            }
            Ok(())
        }
    }
}
