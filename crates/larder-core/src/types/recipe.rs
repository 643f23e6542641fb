//! The recipe record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{NewRecipe, RecipePatch};
use crate::types::{RecipeId, timestamp};

/// A stored recipe.
///
/// `ingredients` and `instructions` are kept as the raw text the user typed;
/// use [`Recipe::ingredient_lines`] and [`Recipe::instruction_steps`] for a
/// line-by-line view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identity, fixed at creation.
    pub id: RecipeId,

    /// Display title.
    pub title: String,

    /// Ingredient list as raw text.
    pub ingredients: String,

    /// Preparation steps as raw text.
    pub instructions: String,

    /// Optional link to a picture of the dish.
    #[serde(
        rename = "imageURL",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub image_url: Option<String>,

    /// When the recipe was added.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the recipe was last changed.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a fresh record from validated input.
    ///
    /// Both timestamps are set to `at`.
    pub fn create(id: RecipeId, input: NewRecipe, at: DateTime<Utc>) -> Self {
        let at = timestamp::truncate(at);
        Self {
            id,
            title: input.title,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image_url: input.image_url,
            created_at: at,
            updated_at: at,
        }
    }

    /// Merges a validated patch onto this record and stamps `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: RecipePatch, at: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            self.instructions = instructions;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        self.updated_at = timestamp::truncate(at);
    }

    /// Non-blank ingredient lines, trimmed.
    pub fn ingredient_lines(&self) -> Vec<&str> {
        non_blank_lines(&self.ingredients)
    }

    /// Non-blank instruction steps, trimmed.
    pub fn instruction_steps(&self) -> Vec<&str> {
        non_blank_lines(&self.instructions)
    }

    /// Number of ingredient lines.
    pub fn ingredient_count(&self) -> usize {
        self.ingredient_lines().len()
    }

    /// Number of instruction steps.
    pub fn step_count(&self) -> usize {
        self.instruction_steps().len()
    }
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
