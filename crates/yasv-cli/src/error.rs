//! CLI error type and exit codes.

use thiserror::Error;
use yasv_core::CalcError;

use crate::config::ConfigError;

pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const CONFIG: i32 = 3;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error: {0}")]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => exit_codes::CONFIG,
            CliError::Calc(_) | CliError::Json(_) | CliError::Io(_) => exit_codes::FAILURE,
        }
    }
}
