//! Compliance Markup CLI
//!
//! Usage: compliance-markup <COMMAND>
//!
//! Commands:
//!   lookup    Resolve a single key for the active profiles
//!   profiles  List every profile in the merged catalog
//!   dump      Print the merged catalog
//!   params    Print every parameter the active profiles resolve

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use compliance_markup::config::Verbosity;
use compliance_markup::Config;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(config.output.verbosity.raised(cli.verbose));

    match &cli.command {
        Commands::Lookup { key, source } => {
            let session = Session::build(&config, source)?;
            commands::lookup::cmd_lookup(&session, key, cli.json)
        }
        Commands::Profiles { source } => {
            let session = Session::build(&config, source)?;
            commands::inspect::cmd_profiles(&session, cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Dump { source } => {
            let session = Session::build(&config, source)?;
            commands::inspect::cmd_dump(&session, cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Params { source } => {
            let session = Session::build(&config, source)?;
            commands::inspect::cmd_params(&session, cli.json).map(|_| ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            ui::output::print_config_warnings(path, &warnings);
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the configured verbosity
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
