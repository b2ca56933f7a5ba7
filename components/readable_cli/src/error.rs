//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] readable::ReadableError),

    /// Input is valid JSON of the wrong shape
    #[error("Input error: {0}")]
    Input(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
