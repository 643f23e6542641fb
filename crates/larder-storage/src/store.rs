//! The record store: CRUD over the recipe collection.
//!
//! Every operation reads the whole collection from the port, and every
//! mutation writes the whole collection back. Nothing is cached between
//! calls, so two stores over the same medium see each other's writes and
//! the last writer wins.
//!
//! Persistence failures never reach the caller as errors. A failed or
//! corrupt read is logged and treated as an empty collection; a failed
//! write is logged and reported through [`Durability::Unpersisted`] on the
//! returned [`Saved`] value.
//!
//! # Usage
//!
//! ```rust
//! use larder_core::{RecipeDraft, validate_create};
//! use larder_storage::{MemoryStorage, RecipeStore};
//!
//! let store = RecipeStore::new(MemoryStorage::new());
//! let input = validate_create(&RecipeDraft {
//!     title: Some("Tea".into()),
//!     ingredients: Some("water\ntea leaves".into()),
//!     instructions: Some("boil\nsteep".into()),
//!     image_url: None,
//! })
//! .unwrap();
//!
//! let saved = store.add(input);
//! assert!(saved.is_persisted());
//! assert_eq!(store.list().len(), 1);
//! ```

use chrono::Duration;
use larder_core::types::timestamp;
use larder_core::{NewRecipe, Recipe, RecipeId, RecipePatch};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::port::StoragePort;

// ============================================================================
// Mutation outcome
// ============================================================================

/// Whether a mutation reached the persistence medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// The collection was written (or no write was needed).
    Persisted,
    /// The write failed; the change exists only in the returned value.
    Unpersisted,
}

/// The result of a store mutation plus its durability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved<T> {
    /// The mutation's result.
    pub value: T,
    /// Whether it was written.
    pub durability: Durability,
}

impl<T> Saved<T> {
    fn new(value: T, durability: Durability) -> Self {
        Self { value, durability }
    }

    /// Returns `true` if the change was written.
    pub fn is_persisted(&self) -> bool {
        self.durability == Durability::Persisted
    }

    /// Discards the durability flag.
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// RecipeStore
// ============================================================================

/// Owns the persisted recipe collection.
///
/// Callers validate input with [`larder_core::schema`] first; the store
/// only accepts the resulting [`NewRecipe`] and [`RecipePatch`] values and
/// never re-validates them.
#[derive(Debug, Clone)]
pub struct RecipeStore<S, C = SystemClock> {
    storage: S,
    clock: C,
}

impl<S: StoragePort> RecipeStore<S, SystemClock> {
    /// Creates a store over `storage` using wall-clock time.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: StoragePort, C: Clock> RecipeStore<S, C> {
    /// Creates a store with an explicit time source.
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// The underlying storage port.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All recipes, in insertion order.
    ///
    /// Returns an empty list if the medium is empty, unreadable, or holds
    /// something that is not a recipe collection.
    pub fn list(&self) -> Vec<Recipe> {
        let bytes = match self.storage.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(storage = %self.storage.describe(), error = %e, "Failed to read recipes");
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        match serde_json::from_slice(&bytes) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(
                    storage = %self.storage.describe(),
                    error = %e,
                    "Stored recipes are corrupt; treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// The recipe with this ID, if any.
    pub fn get(&self, id: &RecipeId) -> Option<Recipe> {
        self.list().into_iter().find(|recipe| &recipe.id == id)
    }

    /// Appends a new recipe with a fresh ID and `createdAt == updatedAt`.
    pub fn add(&self, input: NewRecipe) -> Saved<Recipe> {
        let mut recipes = self.list();

        let mut id = RecipeId::generate();
        while recipes.iter().any(|recipe| recipe.id == id) {
            id = RecipeId::generate();
        }

        let now = timestamp::truncate(self.clock.now());
        let recipe = Recipe::create(id, input, now);
        recipes.push(recipe.clone());
        let durability = self.persist(&recipes);

        debug!(id = %recipe.id, title = %recipe.title, ?durability, "Added recipe");
        Saved::new(recipe, durability)
    }

    /// Merges `patch` onto the recipe with this ID.
    ///
    /// Returns `None` (and writes nothing) if no such recipe exists.
    /// `updatedAt` always moves strictly forward, even if the clock has not.
    pub fn update(&self, id: &RecipeId, patch: RecipePatch) -> Option<Saved<Recipe>> {
        let mut recipes = self.list();
        let Some(recipe) = recipes.iter_mut().find(|recipe| &recipe.id == id) else {
            debug!(%id, "Update skipped; recipe not found");
            return None;
        };

        // Compare at stored precision; a sub-millisecond move is no move.
        let now = timestamp::truncate(self.clock.now());
        let at = if now > recipe.updated_at {
            now
        } else {
            recipe.updated_at + Duration::milliseconds(1)
        };
        recipe.apply(patch, at);
        let updated = recipe.clone();

        let durability = self.persist(&recipes);
        debug!(%id, ?durability, "Updated recipe");
        Some(Saved::new(updated, durability))
    }

    /// Removes the recipe with this ID.
    ///
    /// The value is `true` if a recipe was removed. Nothing is written when
    /// the ID is unknown.
    pub fn delete(&self, id: &RecipeId) -> Saved<bool> {
        let mut recipes = self.list();
        let before = recipes.len();
        recipes.retain(|recipe| &recipe.id != id);

        if recipes.len() == before {
            debug!(%id, "Delete skipped; recipe not found");
            return Saved::new(false, Durability::Persisted);
        }

        let durability = self.persist(&recipes);
        debug!(%id, ?durability, "Deleted recipe");
        Saved::new(true, durability)
    }

    /// Removes every recipe. The value is how many were removed.
    pub fn clear(&self) -> Saved<usize> {
        let removed = self.list().len();
        let durability = self.persist(&[]);
        debug!(removed, ?durability, "Cleared recipes");
        Saved::new(removed, durability)
    }

    fn persist(&self, recipes: &[Recipe]) -> Durability {
        let bytes = match serde_json::to_vec(recipes) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize recipes");
                return Durability::Unpersisted;
            }
        };

        match self.storage.write(&bytes) {
            Ok(()) => Durability::Persisted,
            Err(e) => {
                warn!(storage = %self.storage.describe(), error = %e, "Failed to save recipes");
                Durability::Unpersisted
            }
        }
    }
}
