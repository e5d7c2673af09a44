// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the TraitPilot survey.
//!
//! Each function here is one survey operation: it takes already-decoded
//! input, drives exactly one store, and returns a typed response or an
//! `ApiError`. Transport concerns (routing, status codes, envelopes) live
//! in the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod request_response;
mod submission;

#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};
use traitpilot_domain::{
    FinalSelectionEntry, PROFILE_CATALOGUE, ProfileCatalogue, SelectionEntry, SubmissionRecord,
};
use traitpilot_persistence::{FinalSelectionStore, Lookup, ResponseArchive, SelectionStore};

pub use error::ApiError;
pub use request_response::{
    FINAL_SELECTION_SAVED_MESSAGE, FinalSelectionData, FinalSelectionRequest,
    NO_FINAL_SELECTION_MESSAGE, NO_SELECTIONS_MESSAGE, SELECTIONS_SAVED_MESSAGE,
    SaveResponseResponse, SaveSelectionsRequest, SelectionsData,
};
pub use submission::submission_from_json;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Decodes a raw request body.
///
/// No content type is required; the bytes only have to be JSON.
///
/// # Errors
///
/// Returns `ApiError::MalformedBody` with the decoder's message if the
/// bytes are not valid JSON for `T`.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Returns the profile catalogue.
#[must_use]
pub fn list_profiles() -> ProfileCatalogue {
    PROFILE_CATALOGUE
}

/// Records a completed assessment in the archive.
///
/// Duplicate participant ids are appended as separate rows.
///
/// # Errors
///
/// Returns an error if the body cannot be decoded into a submission or the
/// archive cannot be written.
pub fn save_response(archive: &ResponseArchive, body: &Value) -> ApiResult<SaveResponseResponse> {
    let record: SubmissionRecord = submission_from_json(body)?;
    archive.append(&record)?;

    info!(participant_id = %record.participant_id, "Recorded submission");
    Ok(SaveResponseResponse {
        participant_id: record.participant_id,
    })
}

/// Replaces a participant's in-progress selections.
///
/// # Errors
///
/// Returns an error if `userId` is missing or the store cannot be
/// rewritten.
pub fn save_selections(store: &SelectionStore, request: SaveSelectionsRequest) -> ApiResult<()> {
    let user_id: String = required_user_id(request.user_id)?;
    let entry: SelectionEntry = store.put_selection(
        &user_id,
        request.yes_profiles.unwrap_or_default(),
        request.maybe_profiles.unwrap_or_default(),
    )?;

    info!(
        user_id = %user_id,
        yes = entry.yes_profiles.len(),
        maybe = entry.maybe_profiles.len(),
        "Saved selections"
    );
    Ok(())
}

/// Returns a participant's in-progress selections.
///
/// A participant with no entry gets empty lists and no timestamp, as long
/// as the store has been written at least once. A missing `userId` is
/// looked up like any other absent participant.
///
/// # Errors
///
/// Returns `ApiError::NotFound` if no selections have ever been stored, or
/// an error if the store cannot be read.
pub fn get_selections(store: &SelectionStore, user_id: Option<&str>) -> ApiResult<SelectionsData> {
    match store.get_selection(lookup_key(user_id))? {
        Lookup::Found(entry) => Ok(SelectionsData::from(entry)),
        Lookup::Missing => Ok(SelectionsData::default()),
        Lookup::NoStore => Err(ApiError::NotFound {
            message: String::from(NO_SELECTIONS_MESSAGE),
        }),
    }
}

/// Replaces a participant's final team.
///
/// # Errors
///
/// Returns `ApiError::Validation` unless exactly four profiles are given
/// (the store is left untouched), or an error if `userId` is missing or the
/// store cannot be rewritten.
pub fn submit_final_selection(
    store: &FinalSelectionStore,
    request: FinalSelectionRequest,
) -> ApiResult<()> {
    let user_id: String = required_user_id(request.user_id)?;
    let profiles = request.final_profiles.unwrap_or_default();

    let entry: FinalSelectionEntry = store
        .put_final_selection(&user_id, profiles)
        .inspect_err(|err| warn!(user_id = %user_id, error = %err, "Rejected final selection"))?;

    info!(user_id = %user_id, profiles = ?entry.final_profiles, "Saved final selection");
    Ok(())
}

/// Returns a participant's final team.
///
/// Lookup follows the same rules as [`get_selections`].
///
/// # Errors
///
/// Returns `ApiError::NotFound` if no final selection has ever been stored,
/// or an error if the store cannot be read.
pub fn get_final_selection(
    store: &FinalSelectionStore,
    user_id: Option<&str>,
) -> ApiResult<FinalSelectionData> {
    match store.get_final_selection(lookup_key(user_id))? {
        Lookup::Found(entry) => Ok(FinalSelectionData::from(entry)),
        Lookup::Missing => Ok(FinalSelectionData::default()),
        Lookup::NoStore => Err(ApiError::NotFound {
            message: String::from(NO_FINAL_SELECTION_MESSAGE),
        }),
    }
}

/// An empty `userId` counts as missing for every operation.
fn user_id_given<S: AsRef<str>>(user_id: Option<S>) -> Option<S> {
    user_id.filter(|id| !id.as_ref().is_empty())
}

fn required_user_id(user_id: Option<String>) -> ApiResult<String> {
    user_id_given(user_id).ok_or_else(|| ApiError::missing_field("userId"))
}

// Writes never store an empty id, so a missing id reads as an absent key.
fn lookup_key(user_id: Option<&str>) -> &str {
    user_id_given(user_id).unwrap_or_default()
}
