// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{
    Answer, FINAL_SELECTION_SIZE, PERSONALITY_ITEM_COUNT, PROFILE_COUNT, ProfileDecision,
    ProfileId,
};

/// One completed assessment.
///
/// Every optional field is resolved before the record reaches the archive:
/// absent values stay `None` and are written as empty cells, and absent
/// profile decisions are `NotViewed`. Values the survey does not recognise
/// are kept verbatim. Duplicate participant ids are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Identifier generated by the survey client.
    pub participant_id: String,
    /// External panel identifier (Prolific).
    pub prolific_id: Option<String>,
    /// When the participant started, as sent by the client.
    pub start_time: Option<String>,
    /// When the participant finished, as sent by the client.
    pub end_time: Option<String>,
    /// Scores for `personality_q1` through `personality_q10`.
    pub personality_scores: [Option<Answer<i64>>; PERSONALITY_ITEM_COUNT],
    /// Decisions for `profile1_decision` through `profile19_decision`.
    pub profile_decisions: [Answer<ProfileDecision>; PROFILE_COUNT],
    /// References for `final_profile_1` through `final_profile_4`.
    pub final_profiles: [Option<Answer<ProfileId>>; FINAL_SELECTION_SIZE],
    /// Which qualities the participant focused on.
    pub open_ended_q1: Option<String>,
    /// How the participant's own personality influenced their picks.
    pub open_ended_q2: Option<String>,
    pub task_condition: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub education_level: Option<String>,
}

impl SubmissionRecord {
    /// Creates an otherwise empty record for a participant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingParticipantId` if the id is empty or
    /// whitespace.
    pub fn new(participant_id: impl Into<String>) -> Result<Self, DomainError> {
        let participant_id: String = participant_id.into();
        if participant_id.trim().is_empty() {
            return Err(DomainError::MissingParticipantId);
        }

        Ok(Self {
            participant_id,
            prolific_id: None,
            start_time: None,
            end_time: None,
            personality_scores: std::array::from_fn(|_| None),
            profile_decisions: std::array::from_fn(|_| Answer::from(ProfileDecision::NotViewed)),
            final_profiles: std::array::from_fn(|_| None),
            open_ended_q1: None,
            open_ended_q2: None,
            task_condition: None,
            age: None,
            gender: None,
            education_level: None,
        })
    }

    /// Returns the decision for a 1-based profile number.
    #[must_use]
    pub fn decision_for(&self, profile_number: usize) -> Option<&Answer<ProfileDecision>> {
        profile_number
            .checked_sub(1)
            .and_then(|index| self.profile_decisions.get(index))
    }
}
