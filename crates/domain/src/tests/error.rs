// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidFinalSelectionSize { actual: 3 };
    assert_eq!(format!("{err}"), "Must select exactly 4 profiles");

    let err: DomainError = DomainError::InvalidTraitLevel(String::from("Extreme"));
    assert_eq!(format!("{err}"), "Invalid trait level: 'Extreme'");

    let err: DomainError = DomainError::InvalidDecision(String::from("perhaps"));
    assert_eq!(format!("{err}"), "Invalid profile decision: 'perhaps'");

    let err: DomainError = DomainError::MissingParticipantId;
    assert_eq!(format!("{err}"), "participant_id is required");
}
