//! Subcommand execution.

use std::io::Write;

use chrono::Local;
use tracing::{debug, info};
use yasv_core::{calc, calculate_sum, format_number, greet, sample, ProjectInfo};

use crate::cli::Command;
use crate::error::CliError;

/// Runs `command` against `project`, writing its output to `out`.
///
/// # Errors
///
/// Returns [`CliError::Calc`] for a failed calculation and I/O or JSON errors
/// from writing the output.
pub fn execute<W: Write>(
    command: &Command,
    project: &ProjectInfo,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Demo => {
            project.write_banner(out, Local::now())?;
            calc::run(out)?;
        }
        Command::Sample => sample::run(out)?,
        Command::Info { json } => {
            let snapshot = project.info();
            if *json {
                serde_json::to_writer_pretty(&mut *out, &snapshot)?;
                writeln!(out)?;
            } else {
                writeln!(out, "name: {}", snapshot.name)?;
                writeln!(out, "version: {}", snapshot.version)?;
                writeln!(out, "description: {}", snapshot.description)?;
                writeln!(out, "timestamp: {}", snapshot.iso_timestamp())?;
            }
        }
        Command::Calc { a, b, operation } => {
            let result = project.calculate(*a, *b, operation);
            debug!(a, b, operation = %operation, ?result, "calculated");
            writeln!(out, "{}", format_number(result?))?;
        }
        Command::Greet { name } => writeln!(out, "{}", greet(name))?,
        Command::Sum { a, b } => writeln!(out, "{}", format_number(calculate_sum(*a, *b)))?,
    }

    info!(?command, "command finished");
    Ok(())
}
