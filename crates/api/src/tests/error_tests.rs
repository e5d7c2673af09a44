// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use traitpilot_domain::DomainError;
use traitpilot_persistence::PersistenceError;

use crate::ApiError;

#[test]
fn test_io_failure_keeps_underlying_message() {
    let err: ApiError = ApiError::from(PersistenceError::Io(String::from(
        "Permission denied (os error 13)",
    )));
    assert_eq!(
        err,
        ApiError::Storage {
            message: String::from("Permission denied (os error 13)")
        }
    );
    assert_eq!(err.to_string(), "Permission denied (os error 13)");
}

#[test]
fn test_rejected_entry_becomes_validation_error() {
    let err: ApiError = ApiError::from(PersistenceError::InvalidEntry(
        DomainError::InvalidFinalSelectionSize { actual: 5 },
    ));
    assert_eq!(err.to_string(), "Must select exactly 4 profiles");
    assert!(matches!(err, ApiError::Validation { .. }));
}

#[test]
fn test_invalid_input_display_names_the_field() {
    let err: ApiError = ApiError::InvalidInput {
        field: String::from("userId"),
        message: String::from("a value is required"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'userId': a value is required"
    );
}
