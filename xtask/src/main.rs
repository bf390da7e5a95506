use std::process;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

const BIN_CRATE: &str = "crates/mcp-weathercalc-bin";
const BIN_PACKAGE: &str = "mcp-weathercalc-bin";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("install").about("Cargo Install").arg(
                Arg::new("force")
                    .long("force")
                    .action(ArgAction::SetTrue)
                    .help("Overwrite an existing installation"),
            ),
        )
        .subcommand(Command::new("selftest").about("Run the server's handler self-test"))
        .get_matches();

    match args.subcommand() {
        Some(("install", args)) => handle_install_command(args),
        Some(("selftest", _)) => handle_selftest_command(),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = process::Command::new("cargo")
        .args(args)
        .status()
        .context("Failed to launch cargo")?;

    if !status.success() {
        anyhow::bail!("cargo {} exited with {status}", args.join(" "));
    }
    Ok(())
}

fn handle_install_command(args: &ArgMatches) -> Result<()> {
    let mut cargo_args = vec!["install", "--path", BIN_CRATE];
    if args.get_flag("force") {
        cargo_args.push("--force");
    }
    cargo(&cargo_args)
}

fn handle_selftest_command() -> Result<()> {
    cargo(&["run", "--quiet", "--package", BIN_PACKAGE, "--", "test"])
}
