// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use tracing::debug;
use traitpilot_domain::{ProfileId, SelectionEntry, Timestamp};

use crate::error::PersistenceError;
use crate::keyed::{JsonKeyedStore, Lookup};

/// In-progress yes/maybe selections keyed by user id.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    store: JsonKeyedStore<SelectionEntry>,
}

impl SelectionStore {
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

    /// Returns the latest selections for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn get_selection(&self, user_id: &str) -> Result<Lookup<SelectionEntry>, PersistenceError> {
        self.store.get(user_id)
    }

    /// Replaces the selections for `user_id`, stamped with the current
    /// local time.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or rewritten.
    pub fn put_selection(
        &self,
        user_id: &str,
        yes_profiles: Vec<ProfileId>,
        maybe_profiles: Vec<ProfileId>,
    ) -> Result<SelectionEntry, PersistenceError> {
        self.put_selection_at(user_id, yes_profiles, maybe_profiles, Timestamp::now_local())
    }

    /// Replaces the selections for `user_id` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or rewritten.
    pub fn put_selection_at(
        &self,
        user_id: &str,
        yes_profiles: Vec<ProfileId>,
        maybe_profiles: Vec<ProfileId>,
        timestamp: Timestamp,
    ) -> Result<SelectionEntry, PersistenceError> {
        let entry: SelectionEntry = SelectionEntry::new(yes_profiles, maybe_profiles, timestamp);
        self.store.upsert(user_id, entry.clone())?;
        debug!(
            user_id,
            yes = entry.yes_profiles.len(),
            maybe = entry.maybe_profiles.len(),
            "Stored selections"
        );
        Ok(entry)
    }
}
