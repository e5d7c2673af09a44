// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decoding of the flat assessment body into a `SubmissionRecord`.
//!
//! The survey client posts a single flat object (`personality_q1`,
//! `profile7_decision`, `final_profile_2`, ...). Only `participant_id` is
//! required. Absent and `null` values become empty cells (or `not_viewed`
//! for decisions), and values that are not of the expected kind are
//! archived as the client sent them.

use serde_json::{Map, Value};
use traitpilot_domain::{Answer, ProfileDecision, ProfileId, SubmissionRecord};

use crate::error::ApiError;

/// Builds a submission from a decoded request body.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the body is not an object or the
/// participant id is missing or empty.
pub fn submission_from_json(body: &Value) -> Result<SubmissionRecord, ApiError> {
    let fields: &Map<String, Value> = body.as_object().ok_or_else(|| ApiError::InvalidInput {
        field: String::from("body"),
        message: String::from("expected a JSON object"),
    })?;

    let participant_id: String = text_field(fields, "participant_id")
        .ok_or_else(|| ApiError::missing_field("participant_id"))?;
    let mut record: SubmissionRecord = SubmissionRecord::new(participant_id)?;

    record.start_time = text_field(fields, "start_time");
    record.end_time = text_field(fields, "end_time");
    record.prolific_id = text_field(fields, "prolific_id");
    record.task_condition = text_field(fields, "task_condition");
    record.age = text_field(fields, "age");
    record.gender = text_field(fields, "gender");
    record.education_level = text_field(fields, "education_level");
    record.open_ended_q1 = text_field(fields, "open_ended_q1");
    record.open_ended_q2 = text_field(fields, "open_ended_q2");

    for (index, score) in record.personality_scores.iter_mut().enumerate() {
        *score = integer_field(fields, &format!("personality_q{}", index + 1));
    }
    for (index, decision) in record.profile_decisions.iter_mut().enumerate() {
        *decision = decision_field(fields, &format!("profile{}_decision", index + 1));
    }
    for (index, profile) in record.final_profiles.iter_mut().enumerate() {
        *profile = integer_field::<ProfileId>(fields, &format!("final_profile_{}", index + 1));
    }

    Ok(record)
}

/// Strings are taken as-is; any other value keeps its JSON text.
fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        value => Some(value.to_string()),
    }
}

/// Integers and integer strings in range for `T` are recognised.
fn integer_field<T: TryFrom<i64>>(fields: &Map<String, Value>, name: &str) -> Option<Answer<T>> {
    let parsed: Option<i64> = match fields.get(name)? {
        Value::Null => return None,
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    let answer: Answer<T> = match parsed.and_then(|value| T::try_from(value).ok()) {
        Some(value) => Answer::Recognised(value),
        None => Answer::Verbatim(text_field(fields, name).unwrap_or_default()),
    };
    Some(answer)
}

fn decision_field(fields: &Map<String, Value>, name: &str) -> Answer<ProfileDecision> {
    text_field(fields, name).map_or(Answer::Recognised(ProfileDecision::NotViewed), |text| {
        text.parse::<ProfileDecision>()
            .map_or(Answer::Verbatim(text), Answer::Recognised)
    })
}
