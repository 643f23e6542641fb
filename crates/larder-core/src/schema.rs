//! Validation schema for recipe input.
//!
//! Raw input arrives as a [`RecipeDraft`] (every field optional, straight
//! from a form or a JSON payload). It is parsed into one of two typed values
//! before the store will accept it:
//!
//! - [`validate_create`] → [`NewRecipe`]: `title`, `ingredients` and
//!   `instructions` are required.
//! - [`validate_update`] → [`RecipePatch`]: every field is optional, but any
//!   field that *is* supplied must satisfy the same rules as on create.
//!
//! In both shapes `imageURL` may be absent or empty; a non-empty value must
//! parse as an absolute URL. Failures are reported as a [`ValidationErrors`]
//! keyed by field, never as a panic.
//!
//! # Example
//!
//! ```
//! use larder_core::schema::{validate_create, Field, RecipeDraft};
//!
//! let draft = RecipeDraft {
//!     title: Some(String::new()),
//!     ingredients: Some("x".into()),
//!     instructions: Some("y".into()),
//!     image_url: None,
//! };
//! let errors = validate_create(&draft).unwrap_err();
//! assert_eq!(errors.messages(Field::Title), ["Title is required"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::Recipe;

// ============================================================================
// Field keys and error report
// ============================================================================

/// A recipe field that can carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Field {
    /// `title`
    Title,
    /// `ingredients`
    Ingredients,
    /// `instructions`
    Instructions,
    /// `imageURL`
    ImageUrl,
}

impl Field {
    /// The key used for this field in persisted and submitted JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Ingredients => "ingredients",
            Field::Instructions => "instructions",
            Field::ImageUrl => "imageURL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Field-keyed set of human-readable validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Returns `true` if no messages were recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` has at least one message.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Messages recorded for `field` (empty if none).
    pub fn messages(&self, field: Field) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields with messages, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.keys().copied()
    }

    /// Iterates `(field, messages)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.fields.iter().map(|(f, m)| (*f, m.as_slice()))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Input and output shapes
// ============================================================================

/// Unvalidated recipe fields as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Submitted title.
    #[serde(default)]
    pub title: Option<String>,

    /// Submitted ingredient text.
    #[serde(default)]
    pub ingredients: Option<String>,

    /// Submitted instruction text.
    #[serde(default)]
    pub instructions: Option<String>,

    /// Submitted image link.
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: Some(recipe.title.clone()),
            ingredients: Some(recipe.ingredients.clone()),
            instructions: Some(recipe.instructions.clone()),
            image_url: recipe.image_url.clone(),
        }
    }
}

/// Validated input for adding a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    /// Non-empty title.
    pub title: String,
    /// Non-empty ingredient text.
    pub ingredients: String,
    /// Non-empty instruction text.
    pub instructions: String,
    /// Well-formed URL, or `None`.
    pub image_url: Option<String>,
}

/// Validated partial update.
///
/// `None` leaves a field unchanged. For `image_url`, `Some(None)` clears the
/// link and `Some(Some(url))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement ingredient text.
    pub ingredients: Option<String>,
    /// Replacement instruction text.
    pub instructions: Option<String>,
    /// Replacement or removal of the image link.
    pub image_url: Option<Option<String>>,
}

impl RecipePatch {
    /// Returns `true` if the patch changes no field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.image_url.is_none()
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Validates input for a new recipe.
pub fn validate_create(draft: &RecipeDraft) -> Result<NewRecipe, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = required(&mut errors, Field::Title, draft.title.as_deref());
    let ingredients = required(&mut errors, Field::Ingredients, draft.ingredients.as_deref());
    let instructions = required(&mut errors, Field::Instructions, draft.instructions.as_deref());
    let image_url = image_link(&mut errors, draft.image_url.as_deref());

    errors.into_result(NewRecipe {
        title: title.unwrap_or_default(),
        ingredients: ingredients.unwrap_or_default(),
        instructions: instructions.unwrap_or_default(),
        image_url,
    })
}

/// Validates a partial update.
pub fn validate_update(draft: &RecipeDraft) -> Result<RecipePatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = draft
        .title
        .as_deref()
        .and_then(|v| required(&mut errors, Field::Title, Some(v)));
    let ingredients = draft
        .ingredients
        .as_deref()
        .and_then(|v| required(&mut errors, Field::Ingredients, Some(v)));
    let instructions = draft
        .instructions
        .as_deref()
        .and_then(|v| required(&mut errors, Field::Instructions, Some(v)));
    let image_url = draft
        .image_url
        .as_deref()
        .map(|v| image_link(&mut errors, Some(v)));

    errors.into_result(RecipePatch {
        title,
        ingredients,
        instructions,
        image_url,
    })
}

/// Checks a full record against the schema.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationErrors> {
    validate_create(&RecipeDraft::from(recipe)).map(|_| ())
}

fn required(errors: &mut ValidationErrors, field: Field, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.add(field, required_message(field));
            None
        }
    }
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Title => "Title is required",
        Field::Ingredients => "Ingredients are required",
        Field::Instructions => "Instructions are required",
        Field::ImageUrl => "Image URL is required",
    }
}

fn image_link(errors: &mut ValidationErrors, value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") => None,
        Some(v) => match Url::parse(v) {
            Ok(_) => Some(v.to_string()),
            Err(_) => {
                errors.add(Field::ImageUrl, "Invalid URL");
                None
            }
        },
    }
}
