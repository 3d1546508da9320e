//! CLI error types

use std::path::PathBuf;

use crate::convert::ConversionError;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {}: {message}", .path.display())]
    FileReadError { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    FileWriteError { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
