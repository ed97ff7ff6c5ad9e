//! Error types for the terminal shell

use thiserror::Error;

/// Result type for shell operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while running the shell
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal or I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid-argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
