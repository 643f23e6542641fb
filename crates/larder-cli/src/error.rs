//! Error types for the larder binary.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for CLI handlers
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported by CLI handlers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CliError {
    /// Validation, lookup, or parse failure from the core
    #[error(transparent)]
    Core(#[from] larder_core::Error),

    /// The command line asks for nothing, or for something unconfirmed
    #[error("Usage error: {0}")]
    Usage(String),

    /// Problem with the configuration file or its values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while handling configuration
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failure writing command output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Creates a usage error.
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        CliError::Config(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        CliError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<larder_core::ValidationErrors> for CliError {
    fn from(errors: larder_core::ValidationErrors) -> Self {
        CliError::Core(errors.into())
    }
}
