// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FINAL_SELECTION_SIZE, ProfileId, Timestamp};
use serde::{Deserialize, Serialize};

/// A participant's in-progress yes/maybe selections.
///
/// A new write for the same participant replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// Profiles marked "yes", in the order the participant marked them.
    pub yes_profiles: Vec<ProfileId>,
    /// Profiles marked "maybe", in the order the participant marked them.
    pub maybe_profiles: Vec<ProfileId>,
    /// When the entry was written.
    pub timestamp: Timestamp,
}

impl SelectionEntry {
    #[must_use]
    pub const fn new(
        yes_profiles: Vec<ProfileId>,
        maybe_profiles: Vec<ProfileId>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            yes_profiles,
            maybe_profiles,
            timestamp,
        }
    }
}

/// Exactly four profiles chosen as a team.
///
/// The only way to build one is through `TryFrom<Vec<ProfileId>>`, so a
/// value of this type always satisfies the size rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalSelection([ProfileId; FINAL_SELECTION_SIZE]);

impl FinalSelection {
    #[must_use]
    pub const fn profiles(&self) -> &[ProfileId; FINAL_SELECTION_SIZE] {
        &self.0
    }
}

impl TryFrom<Vec<ProfileId>> for FinalSelection {
    type Error = DomainError;

    fn try_from(profiles: Vec<ProfileId>) -> Result<Self, Self::Error> {
        let actual: usize = profiles.len();
        <[ProfileId; FINAL_SELECTION_SIZE]>::try_from(profiles)
            .map(Self)
            .map_err(|_| DomainError::InvalidFinalSelectionSize { actual })
    }
}

impl TryFrom<&[ProfileId]> for FinalSelection {
    type Error = DomainError;

    fn try_from(profiles: &[ProfileId]) -> Result<Self, Self::Error> {
        <[ProfileId; FINAL_SELECTION_SIZE]>::try_from(profiles)
            .map(Self)
            .map_err(|_| DomainError::InvalidFinalSelectionSize {
                actual: profiles.len(),
            })
    }
}

/// A participant's most recent final team selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSelectionEntry {
    /// The four chosen profiles, in the order the participant listed them.
    pub final_profiles: Vec<ProfileId>,
    /// When the entry was written.
    pub timestamp: Timestamp,
}

impl FinalSelectionEntry {
    #[must_use]
    pub fn new(selection: FinalSelection, timestamp: Timestamp) -> Self {
        Self {
            final_profiles: selection.profiles().to_vec(),
            timestamp,
        }
    }
}
