//! Degradation when the medium is corrupt, disabled, or full.

use larder_storage::{Durability, MemoryStorage};

use crate::common::{TestHarness, retitle, tea};

#[test]
fn test_corrupt_document_lists_empty() {
    let harness = TestHarness::with_storage(MemoryStorage::with_document("[{\"id\": 1}"));
    assert!(harness.store.list().is_empty());
}

#[test]
fn test_add_over_corrupt_document_replaces_it() {
    let harness = TestHarness::with_storage(MemoryStorage::with_document("garbage"));

    let saved = harness.store.add(tea());

    assert!(saved.is_persisted());
    assert_eq!(harness.store.list(), vec![saved.value]);
}

#[test]
fn test_disabled_medium_returns_unpersisted() {
    let harness = TestHarness::new();
    harness.storage.disable("storage disabled");

    let saved = harness.store.add(tea());

    assert_eq!(saved.durability, Durability::Unpersisted);
    assert_eq!(saved.value.title, "Tea");
    assert_eq!(harness.storage.write_count(), 0);
}

#[test]
fn test_quota_failure_keeps_previous_document() {
    let storage = MemoryStorage::new();
    let harness = TestHarness::with_storage(storage.clone());
    let created = harness.store.add(tea()).into_value();
    let before = storage.raw().unwrap();

    let storage = storage.with_quota(before.len());
    let long_title = "T".repeat(before.len());
    let saved = harness
        .store
        .update(&created.id, retitle(&long_title))
        .expect("recipe exists");

    assert!(!saved.is_persisted());
    assert_eq!(saved.value.title, long_title);
    assert_eq!(storage.raw(), Some(before));
    assert_eq!(harness.store.get(&created.id).unwrap().title, "Tea");
}

#[test]
fn test_recovers_after_medium_comes_back() {
    let harness = TestHarness::new();
    harness.storage.disable("temporarily off");
    assert!(!harness.store.add(tea()).is_persisted());

    harness.storage.enable();
    assert!(harness.store.add(tea()).is_persisted());
    assert_eq!(harness.store.list().len(), 1);
}
