#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Larder Core Library
//!
//! The recipe record, its identifier and timestamp types, and the
//! validation schema that callers run before handing input to a store.

pub mod error;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use schema::{
    Field, NewRecipe, RecipeDraft, RecipePatch, ValidationErrors, validate_create,
    validate_recipe, validate_update,
};
pub use types::{Recipe, RecipeId};
