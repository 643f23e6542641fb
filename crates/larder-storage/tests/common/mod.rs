//! Common test utilities for record store integration tests.

use chrono::{TimeZone, Utc};
use larder_core::{NewRecipe, RecipeDraft, RecipePatch, validate_create, validate_update};
use larder_storage::{ManualClock, MemoryStorage, RecipeStore};

/// Test harness: a memory-backed store with a controllable clock.
///
/// `storage` and `clock` share state with the store, so tests can inspect
/// raw bytes, inject failures, and move time.
pub struct TestHarness {
    /// Store under test
    pub store: RecipeStore<MemoryStorage, ManualClock>,
    /// Handle on the store's slot
    pub storage: MemoryStorage,
    /// Handle on the store's clock
    pub clock: ManualClock,
}

impl TestHarness {
    /// Creates a harness over an empty slot.
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Creates a harness over a caller-supplied slot.
    pub fn with_storage(storage: MemoryStorage) -> Self {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap());
        let store = RecipeStore::with_clock(storage.clone(), clock.clone());
        Self {
            store,
            storage,
            clock,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a draft with the three required fields.
pub fn draft(title: &str, ingredients: &str, instructions: &str) -> RecipeDraft {
    RecipeDraft {
        title: Some(title.to_string()),
        ingredients: Some(ingredients.to_string()),
        instructions: Some(instructions.to_string()),
        image_url: None,
    }
}

/// Validated create input for the tea scenario.
pub fn tea() -> NewRecipe {
    validate_create(&draft("Tea", "water\ntea leaves", "boil\nsteep")).expect("valid tea")
}

/// Validated create input with the given title.
pub fn titled(title: &str) -> NewRecipe {
    validate_create(&draft(title, "salt", "boil")).expect("valid recipe")
}

/// Validated patch that only changes the title.
pub fn retitle(title: &str) -> RecipePatch {
    validate_update(&RecipeDraft {
        title: Some(title.to_string()),
        ..RecipeDraft::default()
    })
    .expect("valid patch")
}
