// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only CSV archive of completed submissions.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::debug;
use traitpilot_domain::{
    FINAL_SELECTION_SIZE, PERSONALITY_ITEM_COUNT, PROFILE_COUNT, SubmissionRecord,
};

use crate::ensure_parent_dir;
use crate::error::PersistenceError;

/// Number of columns in every archive row.
pub const ARCHIVE_COLUMN_COUNT: usize =
    3 + PERSONALITY_ITEM_COUNT + PROFILE_COUNT + FINAL_SELECTION_SIZE + 7;

/// Archive columns in the order they are written.
///
/// Every row, the first included, carries exactly these columns.
pub const ARCHIVE_COLUMNS: [&str; ARCHIVE_COLUMN_COUNT] = [
    "participant_id",
    "start_time",
    "end_time",
    "personality_q1",
    "personality_q2",
    "personality_q3",
    "personality_q4",
    "personality_q5",
    "personality_q6",
    "personality_q7",
    "personality_q8",
    "personality_q9",
    "personality_q10",
    "profile1_decision",
    "profile2_decision",
    "profile3_decision",
    "profile4_decision",
    "profile5_decision",
    "profile6_decision",
    "profile7_decision",
    "profile8_decision",
    "profile9_decision",
    "profile10_decision",
    "profile11_decision",
    "profile12_decision",
    "profile13_decision",
    "profile14_decision",
    "profile15_decision",
    "profile16_decision",
    "profile17_decision",
    "profile18_decision",
    "profile19_decision",
    "final_profile_1",
    "final_profile_2",
    "final_profile_3",
    "final_profile_4",
    "open_ended_q1",
    "open_ended_q2",
    "prolific_id",
    "task_condition",
    "age",
    "gender",
    "education_level",
];

/// One data row read back from the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRow {
    cells: Vec<(String, String)>,
}

impl ArchiveRow {
    /// Returns the cell for `column`, or `None` if the column is unknown.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Returns every `(column, value)` pair in file order.
    #[must_use]
    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }
}

/// Write-once log of completed submissions.
#[derive(Debug, Clone)]
pub struct ResponseArchive {
    path: PathBuf,
}

impl ResponseArchive {
    /// Creates an archive handle. Nothing is touched on disk until the
    /// first append.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one submission as a single row.
    ///
    /// If the archive file does not exist yet it is created, together with
    /// any missing parent directories. The header is written first whenever
    /// the file is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, opened or written.
    pub fn append(&self, record: &SubmissionRecord) -> Result<(), PersistenceError> {
        ensure_parent_dir(&self.path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // A file left empty by an earlier failed create still needs its header.
        let needs_header: bool = file.metadata()?.len() == 0;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if needs_header {
            debug!(path = %self.path.display(), "Creating response archive");
            writer.write_record(ARCHIVE_COLUMNS)?;
        }
        writer.write_record(archive_row(record))?;
        writer.flush()?;

        debug!(
            path = %self.path.display(),
            participant_id = %record.participant_id,
            "Appended submission to archive"
        );
        Ok(())
    }

    /// Reads the header line, or `None` if the archive does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_header(&self) -> Result<Option<Vec<String>>, PersistenceError> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let mut reader = ReaderBuilder::new().from_path(&self.path)?;
        let header: &StringRecord = reader.headers()?;
        Ok(Some(header.iter().map(String::from).collect()))
    }

    /// Reads every data row. A missing archive has no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_rows(&self) -> Result<Vec<ArchiveRow>, PersistenceError> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new().from_path(&self.path)?;
        let header: StringRecord = reader.headers()?.clone();

        let mut rows: Vec<ArchiveRow> = Vec::new();
        for result in reader.records() {
            let record: StringRecord = result?;
            let cells: Vec<(String, String)> = header
                .iter()
                .zip(record.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            rows.push(ArchiveRow { cells });
        }
        Ok(rows)
    }
}

/// Flattens a submission into cells matching `ARCHIVE_COLUMNS`.
fn archive_row(record: &SubmissionRecord) -> Vec<String> {
    let mut row: Vec<String> = Vec::with_capacity(ARCHIVE_COLUMNS.len());

    row.push(record.participant_id.clone());
    row.push(text_cell(record.start_time.as_deref()));
    row.push(text_cell(record.end_time.as_deref()));
    row.extend(
        record
            .personality_scores
            .iter()
            .map(|score| number_cell(score.as_ref())),
    );
    row.extend(
        record
            .profile_decisions
            .iter()
            .map(ToString::to_string),
    );
    row.extend(
        record
            .final_profiles
            .iter()
            .map(|profile| number_cell(profile.as_ref())),
    );
    row.push(text_cell(record.open_ended_q1.as_deref()));
    row.push(text_cell(record.open_ended_q2.as_deref()));
    row.push(text_cell(record.prolific_id.as_deref()));
    row.push(text_cell(record.task_condition.as_deref()));
    row.push(text_cell(record.age.as_deref()));
    row.push(text_cell(record.gender.as_deref()));
    row.push(text_cell(record.education_level.as_deref()));

    debug_assert_eq!(row.len(), ARCHIVE_COLUMNS.len());
    row
}

// Absent values are written as empty cells.
fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

fn number_cell<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(String::new, ToString::to_string)
}
