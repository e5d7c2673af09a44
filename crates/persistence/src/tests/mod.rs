// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod final_selection_tests;
mod selection_tests;

use chrono::NaiveDate;
use tempfile::TempDir;
use traitpilot_domain::{Answer, ProfileDecision, SubmissionRecord, Timestamp};

use crate::StorePaths;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn create_test_paths(dir: &TempDir) -> StorePaths {
    StorePaths::in_dir(dir.path())
}

pub fn create_test_timestamp(hour: u32) -> Timestamp {
    Timestamp::from_naive(
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .expect("Valid test date")
            .and_hms_opt(hour, 30, 0)
            .expect("Valid test time"),
    )
}

/// A fully populated submission with every decision set.
pub fn create_test_submission(participant_id: &str) -> SubmissionRecord {
    let mut record: SubmissionRecord =
        SubmissionRecord::new(participant_id).expect("Valid participant id");
    record.prolific_id = Some(String::from("PROLIFIC123"));
    record.start_time = Some(String::from("2025-04-01T10:00:00.000Z"));
    record.end_time = Some(String::from("2025-04-01T10:25:00.000Z"));
    for (index, score) in record.personality_scores.iter_mut().enumerate() {
        *score = Some(Answer::from(
            i64::try_from(index % 7 + 1).expect("small index"),
        ));
    }
    for (index, decision) in record.profile_decisions.iter_mut().enumerate() {
        *decision = Answer::from(match index % 3 {
            0 => ProfileDecision::Yes,
            1 => ProfileDecision::No,
            _ => ProfileDecision::Maybe,
        });
    }
    record.final_profiles = [1, 4, 7, 10].map(|id| Some(Answer::from(id)));
    record.open_ended_q1 = Some(String::from("Reliability and calm"));
    record.open_ended_q2 = Some(String::from("I picked people like me"));
    record.task_condition = Some(String::from("control"));
    record.age = Some(String::from("29"));
    record.gender = Some(String::from("female"));
    record.education_level = Some(String::from("bachelor"));
    record
}
