// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A final team selection did not contain exactly four profiles.
    InvalidFinalSelectionSize {
        /// The number of profiles that were supplied.
        actual: usize,
    },
    /// A trait level label was not one of `Low`, `Moderate` or `High`.
    InvalidTraitLevel(String),
    /// A profile decision was not one of `yes`, `no`, `maybe` or `not_viewed`.
    InvalidDecision(String),
    /// A participant identifier was empty.
    MissingParticipantId,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // The participant-facing wording is part of the HTTP contract.
            Self::InvalidFinalSelectionSize { .. } => {
                write!(f, "Must select exactly 4 profiles")
            }
            Self::InvalidTraitLevel(level) => write!(f, "Invalid trait level: '{level}'"),
            Self::InvalidDecision(decision) => {
                write!(f, "Invalid profile decision: '{decision}'")
            }
            Self::MissingParticipantId => write!(f, "participant_id is required"),
        }
    }
}

impl std::error::Error for DomainError {}
