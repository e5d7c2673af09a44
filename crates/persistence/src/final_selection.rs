// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use tracing::debug;
use traitpilot_domain::{FinalSelection, FinalSelectionEntry, ProfileId, Timestamp};

use crate::error::PersistenceError;
use crate::keyed::{JsonKeyedStore, Lookup};

/// Final four-profile team selections keyed by user id.
#[derive(Debug, Clone)]
pub struct FinalSelectionStore {
    store: JsonKeyedStore<FinalSelectionEntry>,
}

impl FinalSelectionStore {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            store: JsonKeyedStore::new(path),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Returns the latest final selection for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn get_final_selection(
        &self,
        user_id: &str,
    ) -> Result<Lookup<FinalSelectionEntry>, PersistenceError> {
        self.store.get(user_id)
    }

    /// Replaces the final selection for `user_id`.
    ///
    /// The size check happens before the store is read, so a rejected
    /// selection leaves the file exactly as it was (or absent).
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidEntry` unless exactly four profiles
    /// are given, or an I/O error if the store cannot be read or rewritten.
    pub fn put_final_selection(
        &self,
        user_id: &str,
        profile_ids: Vec<ProfileId>,
    ) -> Result<FinalSelectionEntry, PersistenceError> {
        let selection: FinalSelection = FinalSelection::try_from(profile_ids)?;
        self.put_final_selection_at(user_id, selection, Timestamp::now_local())
    }

    /// Replaces the final selection for `user_id` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or rewritten.
    pub fn put_final_selection_at(
        &self,
        user_id: &str,
        selection: FinalSelection,
        timestamp: Timestamp,
    ) -> Result<FinalSelectionEntry, PersistenceError> {
        let entry: FinalSelectionEntry = FinalSelectionEntry::new(selection, timestamp);
        self.store.upsert(user_id, entry.clone())?;
        debug!(user_id, profiles = ?entry.final_profiles, "Stored final selection");
        Ok(entry)
    }
}
