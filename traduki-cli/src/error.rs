//! Error types for the traduki CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (file operations, directory walking).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the traduki library (loading, validation).
    #[error(transparent)]
    I18n(#[from] traduki::I18nError),

    /// Dictionary validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid command argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
