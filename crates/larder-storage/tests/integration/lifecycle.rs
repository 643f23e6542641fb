//! Create, read, update, delete through the public store API.

use chrono::Duration;
use larder_core::{RecipeDraft, RecipeId, validate_update};

use crate::common::{TestHarness, retitle, tea, titled};

#[test]
fn test_tea_scenario() {
    let harness = TestHarness::new();
    let store = &harness.store;

    let created = store.add(tea()).into_value();
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.get(&created.id).as_ref(), Some(&created));

    harness.clock.advance(Duration::seconds(30));
    let updated = store
        .update(&created.id, retitle("Green Tea"))
        .expect("recipe exists")
        .into_value();
    assert_eq!(updated.title, "Green Tea");
    assert_eq!(updated.ingredients, "water\ntea leaves");
    assert_eq!(updated.instructions, created.instructions);

    assert!(store.delete(&created.id).value);
    assert!(store.list().is_empty());
}

#[test]
fn test_ids_are_unique_across_adds() {
    let harness = TestHarness::new();
    let mut ids: Vec<RecipeId> = (0..50)
        .map(|n| harness.store.add(titled(&format!("Recipe {n}"))).value.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_update_missing_leaves_collection_unchanged() {
    let harness = TestHarness::new();
    harness.store.add(tea());
    let before = harness.store.list();

    assert!(harness.store.update(&RecipeId::generate(), retitle("Nope")).is_none());

    assert_eq!(harness.store.list(), before);
}

#[test]
fn test_delete_missing_leaves_collection_unchanged() {
    let harness = TestHarness::new();
    harness.store.add(tea());
    harness.store.add(titled("Soup"));
    let before = harness.store.list();

    assert!(!harness.store.delete(&RecipeId::generate()).value);

    assert_eq!(harness.store.list(), before);
}

#[test]
fn test_delete_removes_exactly_one() {
    let harness = TestHarness::new();
    let a = harness.store.add(titled("A")).into_value();
    let b = harness.store.add(titled("B")).into_value();
    let c = harness.store.add(titled("C")).into_value();

    assert!(harness.store.delete(&b.id).value);

    let remaining: Vec<_> = harness.store.list().into_iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![a.id, c.id]);
}

#[test]
fn test_update_can_clear_image() {
    let harness = TestHarness::new();
    let mut with_image = tea();
    with_image.image_url = Some("https://example.com/tea.jpg".to_string());
    let created = harness.store.add(with_image).into_value();

    let patch = validate_update(&RecipeDraft {
        image_url: Some(String::new()),
        ..RecipeDraft::default()
    })
    .unwrap();
    let updated = harness.store.update(&created.id, patch).unwrap().into_value();

    assert!(updated.image_url.is_none());
    assert!(harness.store.get(&created.id).unwrap().image_url.is_none());
}

#[test]
fn test_two_stores_share_the_medium() {
    let harness = TestHarness::new();
    let other = larder_storage::RecipeStore::new(harness.storage.clone());

    let created = harness.store.add(tea()).into_value();

    assert_eq!(other.get(&created.id), Some(created));
}

#[test]
fn test_repeated_list_is_stable() {
    let harness = TestHarness::new();
    harness.store.add(tea());
    harness.store.add(titled("Soup"));

    let first = harness.store.list();
    let second = harness.store.list();
    assert_eq!(first, second);
}
