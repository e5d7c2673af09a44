// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the TraitPilot survey.
//!
//! Three file-backed stores live in a single data directory:
//!
//! - **Response archive** (`responses.csv`) — append-only CSV, header first,
//!   one row per completed submission. Rows are never rewritten.
//! - **Selection store** (`user_selections.json`) — one JSON object keyed by
//!   user id holding in-progress yes/maybe lists.
//! - **Final selection store** (`final_selections.json`) — one JSON object
//!   keyed by user id holding the four-profile team.
//!
//! ## Consistency
//!
//! There is no in-memory cache. Every read loads the backing file and every
//! keyed write rewrites the whole file through a temporary sibling that is
//! renamed into place. The stores themselves take no locks; callers that
//! share a store between tasks must serialise access (the server keeps one
//! mutex per store).

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
#![allow(clippy::multiple_crate_versions)]

mod archive;
mod error;
mod final_selection;
mod keyed;
mod selection;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

pub use archive::{ARCHIVE_COLUMN_COUNT, ARCHIVE_COLUMNS, ArchiveRow, ResponseArchive};
pub use error::PersistenceError;
pub use final_selection::FinalSelectionStore;
pub use keyed::{JsonKeyedStore, Lookup};
pub use selection::SelectionStore;

/// File name of the response archive inside the data directory.
pub const ARCHIVE_FILE_NAME: &str = "responses.csv";

/// File name of the in-progress selection store inside the data directory.
pub const SELECTIONS_FILE_NAME: &str = "user_selections.json";

/// File name of the final selection store inside the data directory.
pub const FINAL_SELECTIONS_FILE_NAME: &str = "final_selections.json";

/// Locations of the three backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// The response archive.
    pub archive: PathBuf,
    /// The in-progress selection store.
    pub selections: PathBuf,
    /// The final selection store.
    pub final_selections: PathBuf,
}

impl StorePaths {
    /// Places all three files inside `dir` under their default names.
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir: &Path = dir.as_ref();
        Self {
            archive: dir.join(ARCHIVE_FILE_NAME),
            selections: dir.join(SELECTIONS_FILE_NAME),
            final_selections: dir.join(FINAL_SELECTIONS_FILE_NAME),
        }
    }
}

/// Creates the parent directory of `path` if it has one.
fn ensure_parent_dir(path: &Path) -> Result<(), PersistenceError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
