// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tempfile::TempDir;
use traitpilot_domain::{DomainError, FinalSelectionEntry};

use super::{create_test_dir, create_test_paths};
use crate::{FinalSelectionStore, Lookup, PersistenceError};

fn store_in(dir: &TempDir) -> FinalSelectionStore {
    FinalSelectionStore::new(create_test_paths(dir).final_selections)
}

#[test]
fn test_three_profiles_rejected_and_no_store_created() {
    let dir: TempDir = create_test_dir();
    let store: FinalSelectionStore = store_in(&dir);

    let result = store.put_final_selection("u1", vec![1, 2, 3]);

    assert_eq!(
        result,
        Err(PersistenceError::InvalidEntry(
            DomainError::InvalidFinalSelectionSize { actual: 3 }
        ))
    );
    assert!(!store.path().exists());
    assert_eq!(store.get_final_selection("u1").unwrap(), Lookup::NoStore);
}

#[test]
fn test_rejected_selection_leaves_existing_entry_untouched() {
    let dir: TempDir = create_test_dir();
    let store: FinalSelectionStore = store_in(&dir);

    store.put_final_selection("u1", vec![1, 2, 3, 4]).unwrap();
    let before: String = std::fs::read_to_string(store.path()).unwrap();

    assert!(store.put_final_selection("u1", vec![5, 6, 7, 8, 9]).is_err());

    let after: String = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
    assert_eq!(
        store
            .get_final_selection("u1")
            .unwrap()
            .found()
            .unwrap()
            .final_profiles,
        vec![1, 2, 3, 4]
    );
}

#[test]
fn test_second_final_selection_fully_replaces_first() {
    let dir: TempDir = create_test_dir();
    let store: FinalSelectionStore = store_in(&dir);

    store.put_final_selection("u1", vec![1, 2, 3, 4]).unwrap();
    store.put_final_selection("u1", vec![5, 6, 7, 8]).unwrap();

    let entry: FinalSelectionEntry = store.get_final_selection("u1").unwrap().found().unwrap();
    assert_eq!(entry.final_profiles, vec![5, 6, 7, 8]);
}

#[test]
fn test_final_selection_lookup_for_unknown_user_is_missing() {
    let dir: TempDir = create_test_dir();
    let store: FinalSelectionStore = store_in(&dir);

    store.put_final_selection("u1", vec![1, 2, 3, 4]).unwrap();

    assert_eq!(store.get_final_selection("u2").unwrap(), Lookup::Missing);
}

#[test]
fn test_final_and_in_progress_stores_are_separate_files() {
    let dir: TempDir = create_test_dir();
    let paths = create_test_paths(&dir);
    let final_store: FinalSelectionStore = FinalSelectionStore::new(&paths.final_selections);

    final_store.put_final_selection("u1", vec![1, 2, 3, 4]).unwrap();

    assert!(paths.final_selections.is_file());
    assert!(!paths.selections.exists());
}
