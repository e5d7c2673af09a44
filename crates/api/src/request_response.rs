// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! Request field names follow the study frontend (`userId`, `yesProfiles`,
//! ...); response field names follow the persisted entries.

use serde::{Deserialize, Serialize};
use traitpilot_domain::{FinalSelectionEntry, ProfileId, SelectionEntry, Timestamp};

/// Message returned after in-progress selections are stored.
pub const SELECTIONS_SAVED_MESSAGE: &str = "Selections saved successfully";

/// Message returned after a final selection is stored.
pub const FINAL_SELECTION_SAVED_MESSAGE: &str = "Final selection saved successfully";

/// Message returned when selections are requested before any were stored.
pub const NO_SELECTIONS_MESSAGE: &str = "No selections found";

/// Message returned when a final selection is requested before any was stored.
pub const NO_FINAL_SELECTION_MESSAGE: &str = "No final selection found";

/// Request body for saving in-progress selections.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SaveSelectionsRequest {
    /// The participant the selections belong to.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    /// Profiles marked "yes". Absent or `null` means none.
    #[serde(rename = "yesProfiles", default)]
    pub yes_profiles: Option<Vec<ProfileId>>,
    /// Profiles marked "maybe". Absent or `null` means none.
    #[serde(rename = "maybeProfiles", default)]
    pub maybe_profiles: Option<Vec<ProfileId>>,
}

/// Request body for submitting the final team.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FinalSelectionRequest {
    /// The participant the selection belongs to.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    /// The chosen profiles; must contain exactly four.
    #[serde(rename = "finalProfiles", default)]
    pub final_profiles: Option<Vec<ProfileId>>,
}

/// Response for a stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SaveResponseResponse {
    /// The participant id recorded in the archive.
    pub participant_id: String,
}

/// A participant's in-progress selections as returned to the client.
///
/// A participant with nothing stored gets empty lists and a `null`
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SelectionsData {
    pub yes_profiles: Vec<ProfileId>,
    pub maybe_profiles: Vec<ProfileId>,
    pub timestamp: Option<Timestamp>,
}

impl From<SelectionEntry> for SelectionsData {
    fn from(entry: SelectionEntry) -> Self {
        Self {
            yes_profiles: entry.yes_profiles,
            maybe_profiles: entry.maybe_profiles,
            timestamp: Some(entry.timestamp),
        }
    }
}

/// A participant's final selection as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FinalSelectionData {
    pub final_profiles: Vec<ProfileId>,
    pub timestamp: Option<Timestamp>,
}

impl From<FinalSelectionEntry> for FinalSelectionData {
    fn from(entry: FinalSelectionEntry) -> Self {
        Self {
            final_profiles: entry.final_profiles,
            timestamp: Some(entry.timestamp),
        }
    }
}
