// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of items in the personality inventory.
pub const PERSONALITY_ITEM_COUNT: usize = 10;

/// Number of candidate teammate profiles in the catalogue.
pub const PROFILE_COUNT: usize = 19;

/// Number of profiles a participant picks for their final team.
pub const FINAL_SELECTION_SIZE: usize = 4;

/// Reference to a catalogue profile as sent by a participant.
///
/// References are stored as given; they are not checked against the
/// catalogue's id range.
pub type ProfileId = u32;

/// Qualitative level of a single personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitLevel {
    /// Low expression of the trait.
    Low,
    /// Moderate expression of the trait.
    Moderate,
    /// High expression of the trait.
    High,
}

impl TraitLevel {
    /// Returns the label used in the catalogue.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl FromStr for TraitLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Moderate" => Ok(Self::Moderate),
            "High" => Ok(Self::High),
            _ => Err(DomainError::InvalidTraitLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A participant's decision about one candidate profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileDecision {
    /// The participant would work with this person.
    Yes,
    /// The participant would not work with this person.
    No,
    /// The participant is undecided.
    Maybe,
    /// The participant never opened this profile.
    #[default]
    NotViewed,
}

impl ProfileDecision {
    /// Returns the value recorded in the response archive.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
            Self::NotViewed => "not_viewed",
        }
    }
}

impl FromStr for ProfileDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "maybe" => Ok(Self::Maybe),
            "not_viewed" => Ok(Self::NotViewed),
            _ => Err(DomainError::InvalidDecision(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProfileDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Local wall-clock time of a store write.
///
/// Rendered as `YYYY-MM-DD HH:MM:SS` with no offset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Format used for every persisted timestamp.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Captures the current local time.
    #[must_use]
    pub fn now_local() -> Self {
        Self::from_naive(chrono::Local::now().naive_local())
    }

    /// Renders an arbitrary naive date-time in the persisted format.
    #[must_use]
    pub fn from_naive(value: chrono::NaiveDateTime) -> Self {
        Self(value.format(Self::FORMAT).to_string())
    }

    /// Returns the rendered timestamp.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submitted answer as it will be archived.
///
/// Values the survey understands are kept typed; anything else the client
/// sent is kept as its raw text so the submission is archived as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    /// A value of the expected kind.
    Recognised(T),
    /// Any other value, exactly as sent.
    Verbatim(String),
}

impl<T> Answer<T> {
    /// Returns the typed value, if the answer was recognised.
    #[must_use]
    pub const fn recognised(&self) -> Option<&T> {
        match self {
            Self::Recognised(value) => Some(value),
            Self::Verbatim(_) => None,
        }
    }
}

impl<T> From<T> for Answer<T> {
    fn from(value: T) -> Self {
        Self::Recognised(value)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Answer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recognised(value) => value.fmt(f),
            Self::Verbatim(text) => f.write_str(text),
        }
    }
}
