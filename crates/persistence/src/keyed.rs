// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A JSON object file keyed by user id.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ensure_parent_dir;
use crate::error::PersistenceError;

/// Result of looking a key up in a keyed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The backing file has never been written.
    NoStore,
    /// The store exists but holds no entry for the key.
    Missing,
    /// The entry stored for the key.
    Found(T),
}

impl<T> Lookup<T> {
    /// Returns the entry if one was found.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(entry) => Some(entry),
            Self::NoStore | Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn is_no_store(&self) -> bool {
        matches!(self, Self::NoStore)
    }
}

/// A whole-file JSON map from user id to entry.
///
/// Reads load the entire file; writes replace the entry for one key and
/// rewrite the entire file. Last write wins per key.
#[derive(Debug, Clone)]
pub struct JsonKeyedStore<T> {
    path: PathBuf,
    entry: PhantomData<fn() -> T>,
}

impl<T> JsonKeyedStore<T>
where
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            entry: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every entry, or `None` if the store file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of entries.
    pub fn load(&self) -> Result<Option<BTreeMap<String, T>>, PersistenceError> {
        let bytes: Vec<u8> = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entries: BTreeMap<String, T> = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Loaded keyed store"
        );
        Ok(Some(entries))
    }

    /// Looks up the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded.
    pub fn get(&self, key: &str) -> Result<Lookup<T>, PersistenceError> {
        let lookup: Lookup<T> = match self.load()? {
            None => Lookup::NoStore,
            Some(mut entries) => entries.remove(key).map_or(Lookup::Missing, Lookup::Found),
        };
        Ok(lookup)
    }

    /// Replaces the entry for `key` and rewrites the store.
    ///
    /// A missing store starts out empty. Nothing is merged from the
    /// previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing store cannot be loaded or the new
    /// contents cannot be written.
    pub fn upsert(&self, key: &str, entry: T) -> Result<(), PersistenceError> {
        let mut entries: BTreeMap<String, T> = self.load()?.unwrap_or_default();
        entries.insert(key.to_string(), entry);
        self.write_all(&entries)
    }

    fn write_all(&self, entries: &BTreeMap<String, T>) -> Result<(), PersistenceError> {
        ensure_parent_dir(&self.path)?;
        let contents: Vec<u8> = serde_json::to_vec_pretty(entries)?;

        // Rename over the target so readers never see a half-written file.
        let staging: PathBuf = self.staging_path();
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Rewrote keyed store"
        );
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("store"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
