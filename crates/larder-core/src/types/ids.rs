//! Recipe identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Error;

/// Opaque identifier for a stored recipe.
///
/// Assigned once by the store when a recipe is added and never changed
/// afterwards. Fresh IDs are hyphenated UUID v4 strings, but any non-blank
/// string read back from storage is accepted and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(String);

impl RecipeId {
    /// Creates a new random recipe ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use larder_core::RecipeId;
    ///
    /// let a = RecipeId::generate();
    /// let b = RecipeId::generate();
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecipeId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(Error::InvalidId { input: value });
        }
        Ok(Self(value))
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecipeId {
    type Err = Error;

    /// Parses user-typed text, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidId {
                input: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
