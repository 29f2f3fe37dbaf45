//! yasv CLI - Project banner and arithmetic demos
//!
//! This binary provides:
//! - The project demo (banner plus calculator) when run without a subcommand
//! - The greeting/sum sample
//! - One-off `info`, `calc`, `greet` and `sum` commands

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod error;

use std::io::Write;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;
use error::{exit_codes, CliError};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so command output on stdout stays exact.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    let command = cli.command.clone().unwrap_or(Command::Demo);
    debug!(?command, project = config.project.name(), "dispatching");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&command, &config.project, &mut out)?;
    out.flush()?;

    Ok(exit_codes::SUCCESS)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("yasv: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
