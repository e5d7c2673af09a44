// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use traitpilot_domain::DomainError;

/// Errors that can occur during persistence operations.
///
/// I/O, CSV and JSON failures keep the underlying message verbatim; it is
/// reported to the participant unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Reading, creating or writing a backing file failed.
    #[error("{0}")]
    Io(String),
    /// The CSV writer or reader failed.
    #[error("{0}")]
    Csv(String),
    /// A keyed store could not be encoded or decoded as JSON.
    #[error("{0}")]
    Serialization(String),
    /// The entry was rejected before the store was touched.
    #[error(transparent)]
    InvalidEntry(#[from] DomainError),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
