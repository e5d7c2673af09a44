// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use traitpilot_domain::DomainError;
use traitpilot_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. Every variant is reported to the participant as a JSON
/// error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request body was not valid JSON of the expected shape.
    #[error("{message}")]
    MalformedBody {
        /// The decoder's description of the problem.
        message: String,
    },
    /// A field was missing or had the wrong type.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A participant-correctable rule was violated.
    #[error("{message}")]
    Validation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// Nothing has been stored yet for the requested resource.
    #[error("{message}")]
    NotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A backing file could not be read or written.
    #[error("{message}")]
    Storage {
        /// The underlying error text, unmodified.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn missing_field(field: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: String::from("a value is required"),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidFinalSelectionSize { .. } => Self::Validation {
                message: err.to_string(),
            },
            DomainError::MissingParticipantId => Self::missing_field("participant_id"),
            DomainError::InvalidDecision(_) | DomainError::InvalidTraitLevel(_) => {
                Self::InvalidInput {
                    field: String::from("body"),
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::InvalidEntry(domain) => Self::from(domain),
            PersistenceError::Io(_)
            | PersistenceError::Csv(_)
            | PersistenceError::Serialization(_) => Self::Storage {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody {
            message: err.to_string(),
        }
    }
}
