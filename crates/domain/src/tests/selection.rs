// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, FinalSelection, FinalSelectionEntry, ProfileId, SelectionEntry, Timestamp,
};
use chrono::NaiveDate;

fn fixed_timestamp() -> Timestamp {
    Timestamp::from_naive(
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

#[test]
fn test_final_selection_accepts_exactly_four() {
    let selection: FinalSelection = FinalSelection::try_from(vec![3, 1, 4, 15]).unwrap();
    assert_eq!(selection.profiles(), &[3, 1, 4, 15]);
}

#[test]
fn test_final_selection_rejects_three() {
    let result: Result<FinalSelection, DomainError> = FinalSelection::try_from(vec![1, 2, 3]);
    assert_eq!(
        result,
        Err(DomainError::InvalidFinalSelectionSize { actual: 3 })
    );
}

#[test]
fn test_final_selection_rejects_five_and_empty() {
    let five: &[ProfileId] = &[1, 2, 3, 4, 5];
    assert!(FinalSelection::try_from(five).is_err());
    assert!(FinalSelection::try_from(Vec::<ProfileId>::new()).is_err());
}

#[test]
fn test_final_selection_does_not_check_catalogue_range() {
    assert!(FinalSelection::try_from(vec![0, 99, 100, 1000]).is_ok());
}

#[test]
fn test_selection_entry_json_shape() {
    let entry: SelectionEntry = SelectionEntry::new(vec![1, 2], vec![3], fixed_timestamp());
    let value: serde_json::Value = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "yes_profiles": [1, 2],
            "maybe_profiles": [3],
            "timestamp": "2025-02-14 12:00:00",
        })
    );
}

#[test]
fn test_final_selection_entry_json_shape() {
    let selection: FinalSelection = FinalSelection::try_from(vec![5, 6, 7, 8]).unwrap();
    let entry: FinalSelectionEntry = FinalSelectionEntry::new(selection, fixed_timestamp());
    let value: serde_json::Value = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "final_profiles": [5, 6, 7, 8],
            "timestamp": "2025-02-14 12:00:00",
        })
    );
}
