//! The store over a real file.

use larder_core::RecipeDraft;
use larder_storage::{DEFAULT_NAMESPACE, FileStorage, RecipeStore, StoragePort};
use tempfile::TempDir;

use crate::common::{draft, retitle, tea};

#[test]
fn test_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let created = {
        let store = RecipeStore::new(FileStorage::new(dir.path(), DEFAULT_NAMESPACE));
        store.add(tea()).into_value()
    };

    let reopened = RecipeStore::new(FileStorage::new(dir.path(), DEFAULT_NAMESPACE));
    assert_eq!(reopened.get(&created.id), Some(created));
}

#[test]
fn test_namespaces_are_separate() {
    let dir = TempDir::new().unwrap();
    let home = RecipeStore::new(FileStorage::new(dir.path(), "home"));
    let work = RecipeStore::new(FileStorage::new(dir.path(), "work"));

    home.add(tea());

    assert_eq!(home.list().len(), 1);
    assert!(work.list().is_empty());
}

#[test]
fn test_file_holds_camel_case_array() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path(), DEFAULT_NAMESPACE);
    let store = RecipeStore::new(storage.clone());
    let input = larder_core::validate_create(&RecipeDraft {
        image_url: Some("https://example.com/tea.png".to_string()),
        ..draft("Tea", "water", "boil")
    })
    .unwrap();
    store.add(input);

    let raw = storage.read().unwrap().unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let record = &doc.as_array().unwrap()[0];
    for key in ["id", "title", "ingredients", "instructions", "imageURL", "createdAt", "updatedAt"] {
        assert!(record.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_hand_edited_file_is_read() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path(), DEFAULT_NAMESPACE);
    std::fs::write(
        storage.path(),
        r#"[{"id":"0b6f3c4e-2a51-4d0e-9a0e-6c2f1f5b7d10","title":"Toast","ingredients":"bread","instructions":"toast it","imageURL":"","createdAt":"2025-01-01T00:00:00.000Z","updatedAt":"2025-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();

    let store = RecipeStore::new(storage);
    let recipes = store.list();
    assert_eq!(recipes.len(), 1);
    assert!(recipes[0].image_url.is_none());

    let updated = store.update(&recipes[0].id, retitle("Buttered Toast")).unwrap();
    assert!(updated.is_persisted());
    assert!(updated.value.updated_at > recipes[0].updated_at);
}

#[test]
fn test_unwritable_location_is_unpersisted() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let store = RecipeStore::new(FileStorage::new(&blocker, DEFAULT_NAMESPACE));
    let saved = store.add(tea());

    assert!(!saved.is_persisted());
    assert!(store.list().is_empty());
}
