// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared test helpers for API tests.

use serde_json::{Map, Value, json};
use tempfile::TempDir;
use traitpilot_persistence::{FinalSelectionStore, ResponseArchive, SelectionStore, StorePaths};

/// Stores rooted in a fresh temporary directory.
pub struct TestStores {
    pub dir: TempDir,
    pub archive: ResponseArchive,
    pub selections: SelectionStore,
    pub final_selections: FinalSelectionStore,
}

pub fn create_test_stores() -> TestStores {
    let dir: TempDir = tempfile::tempdir().expect("Failed to create temp dir");
    let paths: StorePaths = StorePaths::in_dir(dir.path());
    TestStores {
        archive: ResponseArchive::new(paths.archive),
        selections: SelectionStore::new(paths.selections),
        final_selections: FinalSelectionStore::new(paths.final_selections),
        dir,
    }
}

/// A submission body shaped like the one the survey client posts.
///
/// Every profile decision except `profile7_decision` is present.
pub fn create_valid_submission_body(participant_id: &str) -> Value {
    let mut body: Map<String, Value> = Map::new();
    body.insert(String::from("participant_id"), json!(participant_id));
    body.insert(String::from("start_time"), json!("2025-05-01T09:00:00.000Z"));
    body.insert(String::from("end_time"), json!("2025-05-01T09:20:00.000Z"));
    body.insert(String::from("prolific_id"), json!("5f1a2b3c"));
    body.insert(String::from("task_condition"), json!("treatment"));
    body.insert(String::from("age"), json!(34));
    body.insert(String::from("gender"), json!("male"));
    body.insert(String::from("education_level"), json!("master"));
    body.insert(String::from("open_ended_q1"), json!("Dependability"));
    body.insert(String::from("open_ended_q2"), json!("Not much"));
    for i in 1..=10 {
        body.insert(format!("personality_q{i}"), json!(i % 7 + 1));
    }
    for i in (1..=19).filter(|i| *i != 7) {
        let decision: &str = if i <= 4 { "yes" } else { "no" };
        body.insert(format!("profile{i}_decision"), json!(decision));
    }
    for i in 1..=4 {
        body.insert(format!("final_profile_{i}"), json!(i));
    }
    Value::Object(body)
}
