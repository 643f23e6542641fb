//! Error types for the Larder core library.

use crate::schema::ValidationErrors;

/// Errors surfaced to callers of the Larder core and store APIs.
///
/// Persistence failures are deliberately absent: the store degrades on
/// those instead of returning them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Caller-supplied fields failed the schema.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No recipe with this ID exists.
    #[error("Recipe not found: {id}")]
    NotFound {
        /// ID that was looked up
        id: String,
    },

    /// Blank text where a recipe ID was expected.
    #[error("Invalid recipe id '{input}': must not be blank")]
    InvalidId {
        /// The rejected input
        input: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Larder operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a not-found error for the given ID.
    pub fn not_found(id: impl ToString) -> Self {
        Error::NotFound { id: id.to_string() }
    }

    /// Returns `true` if the user can fix this by correcting their input.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::InvalidId { .. } => true,
            Error::NotFound { .. } => true,
            Error::Serialization(_) => false,
        }
    }

    /// Returns the field-keyed report for validation failures.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
