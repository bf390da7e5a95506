use clap::{Parser, Subcommand};
use mcp_weathercalc_core::config::SERVER_NAME;

#[derive(Parser)]
#[command(name = "weathercalc")]
#[command(author, version, about = "Weather and calculator MCP server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server using stdio transport
    Stdio {
        /// Server name
        #[arg(long, default_value = SERVER_NAME)]
        name: String,

        /// Server version
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        version: String,
    },
    /// Test the handler implementation
    Test,
    /// Show various MCP server components
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// Show all available tools with their MCP naming convention
    Tools {
        /// Custom name to replace 'weathercalc' in tool names
        #[arg(long, default_value = SERVER_NAME)]
        name: String,
    },
    /// Show the resource catalog
    Resources,
    /// Show the prompt catalog
    Prompts,
    /// Print the JSON input schema of a tool
    Schema {
        /// Tool name (e.g. 'calculator')
        tool: String,
    },
}
