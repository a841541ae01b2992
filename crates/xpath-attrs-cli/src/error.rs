//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Command line rejected by the argument parser
    #[error("{message}")]
    Usage {
        /// Parser message without its `error:` prefix
        message: String,
    },

    /// Attribute specification file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    SpecFile {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Locator library error
    #[error("{0}")]
    Locator(#[from] xpath_attrs::LocatorError),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        Self::Usage {
            message: rendered
                .trim_start_matches("error: ")
                .trim_end()
                .to_string(),
        }
    }
}
