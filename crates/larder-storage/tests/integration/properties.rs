//! Property tests over arbitrary operation sequences.

use std::collections::HashMap;

use chrono::Duration;
use larder_core::{Recipe, RecipeId};
use proptest::prelude::*;

use crate::common::{TestHarness, retitle, titled};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Update(usize, String),
    Delete(usize),
    Tick(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Op::Add),
        (any::<usize>(), "[A-Z]{1,8}").prop_map(|(i, t)| Op::Update(i, t)),
        any::<usize>().prop_map(Op::Delete),
        (0i64..5_000).prop_map(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn test_list_matches_model(ops in proptest::collection::vec(op(), 0..40)) {
        let harness = TestHarness::new();
        let mut order: Vec<RecipeId> = Vec::new();
        let mut model: HashMap<RecipeId, Recipe> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(title) => {
                    let created = harness.store.add(titled(&title)).into_value();
                    prop_assert_eq!(created.created_at, created.updated_at);
                    prop_assert!(!model.contains_key(&created.id));
                    order.push(created.id.clone());
                    model.insert(created.id.clone(), created);
                }
                Op::Update(i, title) => {
                    if order.is_empty() {
                        prop_assert!(harness.store.update(&RecipeId::generate(), retitle(&title)).is_none());
                        continue;
                    }
                    let id = order[i % order.len()].clone();
                    let before = model[&id].clone();
                    let after = harness.store.update(&id, retitle(&title)).unwrap().into_value();
                    prop_assert_eq!(&after.id, &before.id);
                    prop_assert_eq!(after.created_at, before.created_at);
                    prop_assert!(after.updated_at > before.updated_at);
                    prop_assert_eq!(&after.title, &title);
                    model.insert(id, after);
                }
                Op::Delete(i) => {
                    if order.is_empty() {
                        prop_assert!(!harness.store.delete(&RecipeId::generate()).value);
                        continue;
                    }
                    let id = order.remove(i % order.len());
                    model.remove(&id);
                    prop_assert!(harness.store.delete(&id).value);
                    prop_assert!(!harness.store.delete(&id).value);
                }
                Op::Tick(ms) => harness.clock.advance(Duration::milliseconds(ms)),
            }
        }

        let expected: Vec<Recipe> = order.iter().map(|id| model[id].clone()).collect();
        prop_assert_eq!(harness.store.list(), expected.clone());
        prop_assert_eq!(harness.store.list(), expected);
    }
}
