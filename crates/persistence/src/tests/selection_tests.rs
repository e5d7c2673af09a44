// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tempfile::TempDir;
use traitpilot_domain::SelectionEntry;

use super::{create_test_dir, create_test_paths, create_test_timestamp};
use crate::{Lookup, SelectionStore};

fn store_in(dir: &TempDir) -> SelectionStore {
    SelectionStore::new(create_test_paths(dir).selections)
}

#[test]
fn test_put_then_get_returns_lists_and_timestamp() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store.put_selection("u1", vec![1, 2], vec![3]).unwrap();

    let entry: SelectionEntry = store.get_selection("u1").unwrap().found().unwrap();
    assert_eq!(entry.yes_profiles, vec![1, 2]);
    assert_eq!(entry.maybe_profiles, vec![3]);
    assert_eq!(entry.timestamp.as_str().len(), 19);
}

#[test]
fn test_get_before_store_exists_is_no_store() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    assert_eq!(store.get_selection("unknown").unwrap(), Lookup::NoStore);
    assert!(!store.path().exists());
}

#[test]
fn test_get_unknown_user_after_store_exists_is_missing() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store.put_selection("u1", vec![1], Vec::new()).unwrap();

    assert_eq!(store.get_selection("unknown").unwrap(), Lookup::Missing);
}

#[test]
fn test_second_write_replaces_lists_without_merging() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store
        .put_selection_at("u1", vec![1, 2, 3], vec![4], create_test_timestamp(9))
        .unwrap();
    store
        .put_selection_at("u1", vec![5], Vec::new(), create_test_timestamp(10))
        .unwrap();

    let entry: SelectionEntry = store.get_selection("u1").unwrap().found().unwrap();
    assert_eq!(
        entry,
        SelectionEntry::new(vec![5], Vec::new(), create_test_timestamp(10))
    );
}

#[test]
fn test_writes_for_different_users_coexist() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store.put_selection("u1", vec![1], vec![]).unwrap();
    store.put_selection("u2", vec![2], vec![]).unwrap();

    assert_eq!(
        store.get_selection("u1").unwrap().found().unwrap().yes_profiles,
        vec![1]
    );
    assert_eq!(
        store.get_selection("u2").unwrap().found().unwrap().yes_profiles,
        vec![2]
    );
}

#[test]
fn test_profile_ids_are_not_range_checked() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store.put_selection("u1", vec![0, 250], vec![77]).unwrap();

    let entry: SelectionEntry = store.get_selection("u1").unwrap().found().unwrap();
    assert_eq!(entry.yes_profiles, vec![0, 250]);
    assert_eq!(entry.maybe_profiles, vec![77]);
}

#[test]
fn test_persisted_layout_matches_keyed_json_object() {
    let dir: TempDir = create_test_dir();
    let store: SelectionStore = store_in(&dir);

    store
        .put_selection_at("u1", vec![1, 2], vec![3], create_test_timestamp(8))
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "u1": {
                "yes_profiles": [1, 2],
                "maybe_profiles": [3],
                "timestamp": "2025-04-01 08:30:00",
            }
        })
    );
}
