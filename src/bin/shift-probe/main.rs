// shift-probe - debug client for the shift scheduling service

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RunArgs};
use commands::{execute_payload, execute_run, execute_validate};
use shift_probe::ProbeConfig;

/// Logs go to stderr so stdout only carries the report
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        None => execute_run(&RunArgs::default(), ProbeConfig::load(cli.config.as_deref())?),
        Some(Commands::Run(args)) => execute_run(args, ProbeConfig::load(cli.config.as_deref())?),
        Some(Commands::Payload(args)) => {
            execute_payload(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Validate(args)) => {
            execute_validate(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
