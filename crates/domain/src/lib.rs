// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the TraitPilot survey.
//!
//! This crate owns everything about the study that is independent of
//! storage and transport: the fixed catalogue of candidate teammate
//! profiles, the shape of a completed submission, and the in-progress and
//! final selection entries.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalogue;
mod error;
mod selection;
mod submission;
mod types;

#[cfg(test)]
mod tests;

pub use catalogue::{PROFILE_CATALOGUE, ProfileCatalogue, ProfileRecord};
pub use error::DomainError;
pub use selection::{FinalSelection, FinalSelectionEntry, SelectionEntry};
pub use submission::SubmissionRecord;
pub use types::{
    Answer, FINAL_SELECTION_SIZE, PERSONALITY_ITEM_COUNT, PROFILE_COUNT, ProfileDecision, ProfileId,
    Timestamp, TraitLevel,
};
