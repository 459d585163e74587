//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// I/O error (stdout)
    #[error("{0}")]
    Io(String),

    /// Runtime or server failure
    #[error("{0}")]
    BootFailed(String),

    /// Malformed command-line argument
    #[error("{0}")]
    InvalidArgument(String),

    /// The checked query produced validation errors
    #[error("query has {0} validation error(s)")]
    ValidationFailed(usize),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "QG_CLI_CONFIG_ERROR",
            Self::Io(_) => "QG_CLI_IO_ERROR",
            Self::BootFailed(_) => "QG_CLI_BOOT_FAILED",
            Self::InvalidArgument(_) => "QG_CLI_INVALID_ARGUMENT",
            Self::ValidationFailed(_) => "QG_CLI_VALIDATION_FAILED",
        }
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
