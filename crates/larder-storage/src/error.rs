//! Error types for larder-storage

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for storage port operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures reported by a [`StoragePort`](crate::StoragePort).
///
/// The record store catches these at its boundary; they never reach the
/// store's callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// Filesystem error while touching the backing file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The medium is disabled or otherwise not reachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The medium refused the write because it is full
    #[error("Storage quota exceeded: {needed} bytes requested, {limit} allowed")]
    QuotaExceeded {
        /// Size of the rejected document
        needed: usize,
        /// Configured ceiling
        limit: usize,
    },
}

impl StorageError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        StorageError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        StorageError::Unavailable(reason.into())
    }

    /// Returns whether trying again later could succeed.
    ///
    /// The store itself never retries; this is for callers that surface a
    /// failed write to a user.
    pub fn is_retryable(&self) -> bool {
        match self {
            StorageError::Io { .. } => true,
            StorageError::Unavailable(_) => true,
            StorageError::QuotaExceeded { .. } => false,
        }
    }
}
