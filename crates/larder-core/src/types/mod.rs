//! Core record types.

mod ids;
mod proptests;
mod recipe;
pub mod timestamp;

pub use ids::RecipeId;
pub use recipe::Recipe;
