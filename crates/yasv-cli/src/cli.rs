//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Project metadata banner and arithmetic demos.
#[derive(Debug, Parser)]
#[command(name = "yasv", version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Project config file (defaults to ./yasv.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the project banner followed by the calculator demo (default)
    Demo,
    /// Print the greeting and sum samples
    Sample,
    /// Print project info with a fresh timestamp
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply an operation to two numbers
    Calc {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// One of: add, subtract, multiply, divide
        #[arg(default_value = "add")]
        operation: String,
    },
    /// Greet someone
    Greet {
        name: String,
    },
    /// Add two numbers
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}
