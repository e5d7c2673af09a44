// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed catalogue of candidate teammate profiles.
//!
//! Every participant reviews the same nineteen profiles. The table is
//! compiled into the binary and never changes at runtime.

use crate::types::{PROFILE_COUNT, TraitLevel};
use serde::ser::{Serialize, Serializer};

/// A candidate teammate profile.
///
/// Serializes with the field names the study frontend expects
/// (`Extraversion`, ..., `Description`); the id is carried by the
/// enclosing map key rather than the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileRecord {
    #[serde(skip)]
    id: u8,
    extraversion: TraitLevel,
    openness: TraitLevel,
    conscientiousness: TraitLevel,
    emotional_stability: TraitLevel,
    agreeableness: TraitLevel,
    description: &'static str,
}

impl ProfileRecord {
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    #[must_use]
    pub const fn extraversion(&self) -> TraitLevel {
        self.extraversion
    }

    #[must_use]
    pub const fn openness(&self) -> TraitLevel {
        self.openness
    }

    #[must_use]
    pub const fn conscientiousness(&self) -> TraitLevel {
        self.conscientiousness
    }

    #[must_use]
    pub const fn emotional_stability(&self) -> TraitLevel {
        self.emotional_stability
    }

    #[must_use]
    pub const fn agreeableness(&self) -> TraitLevel {
        self.agreeableness
    }

    /// Returns the five trait levels in catalogue column order.
    #[must_use]
    pub const fn traits(&self) -> [TraitLevel; 5] {
        [
            self.extraversion,
            self.openness,
            self.conscientiousness,
            self.emotional_stability,
            self.agreeableness,
        ]
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// Read-only view over the profile table.
///
/// Serializes as a JSON object keyed by profile id in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct ProfileCatalogue {
    records: &'static [ProfileRecord; PROFILE_COUNT],
}

/// The catalogue every participant is shown.
pub static PROFILE_CATALOGUE: ProfileCatalogue = ProfileCatalogue { records: &PROFILES };

impl ProfileCatalogue {
    /// Returns every profile ordered by id.
    #[must_use]
    pub const fn records(&self) -> &'static [ProfileRecord] {
        self.records
    }

    /// Looks up a single profile by id.
    #[must_use]
    pub fn profile(&self, id: u8) -> Option<&'static ProfileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the ids of all profiles in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.records.iter().map(|record| record.id)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for ProfileCatalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.records.iter().map(|record| (record.id, record)))
    }
}

const fn profile(id: u8, traits: [TraitLevel; 5], description: &'static str) -> ProfileRecord {
    ProfileRecord {
        id,
        extraversion: traits[0],
        openness: traits[1],
        conscientiousness: traits[2],
        emotional_stability: traits[3],
        agreeableness: traits[4],
        description,
    }
}

// Trait order: extraversion, openness, conscientiousness, emotional stability, agreeableness.
#[rustfmt::skip]
static PROFILES: [ProfileRecord; PROFILE_COUNT] = {
    use TraitLevel::{High, Low, Moderate};
    [
    profile(
        1,
        [Low, High, Low, High, High],
        "This is someone who naturally prefers quiet settings and solitude. They are creative, curious, and remain open to new ideas. When it comes to work, they prefer flexibility and adapt well to unstructured tasks. In challenging situations, they remain resilient, calm, and composed under stress. Despite their quieter nature, they actively prioritize harmony and foster teamwork in group settings.",
    ),
    profile(
        2,
        [High, Moderate, High, Moderate, High],
        "This person is typically energized by social activities and groups. They take a balanced approach to new experiences, balancing curiosity with practicality. In their work, they are notably goal-driven, organized, and dependable. While they generally balance calmness with occasional stress, they consistently prioritize harmony and foster teamwork in their interactions.",
    ),
    profile(
        3,
        [Moderate, High, Moderate, Moderate, High],
        "This individual comfortably balances social interaction and solitude. They bring a creative and curious mindset, always open to new ideas. Their approach to tasks shows a good balance between structure and flexibility. Emotionally, they maintain a steady balance between calmness and occasional stress. In group settings, they naturally prioritize harmony and actively foster teamwork.",
    ),
    profile(
        4,
        [Low, Low, High, Low, Moderate],
        "This individual typically prefers quiet settings and solitude. When approaching new experiences, they favor routines and practical solutions. At work, they are notably goal-driven, organized, and dependable. While they may be sensitive to stress and experience emotional fluctuations, they tend to maintain a balanced approach, combining cooperation with assertiveness.",
    ),
    profile(
        5,
        [High, High, Moderate, Moderate, High],
        "This person is energized by social activities and groups. They show creativity and curiosity, staying consistently open to new ideas. In their work approach, they balance structure with flexibility. When facing challenges, they balance calmness with occasional stress. In group settings, they naturally prioritize harmony and actively foster teamwork.",
    ),
    profile(
        6,
        [Low, High, High, Moderate, Low],
        "This is someone who prefers quiet settings and solitude. They demonstrate creativity and curiosity, remaining open to new ideas. At work, they are goal-driven, organized, and dependable. While they balance calmness with occasional stress, they tend to focus on personal goals and communicate directly.",
    ),
    profile(
        7,
        [Low, High, High, Low, High],
        "While preferring quiet settings and solitude, this person shows strong creativity and curiosity, staying open to new ideas. They are goal-driven, organized, and dependable in their work. Though sensitive to stress and experiencing emotional fluctuations, they consistently prioritize harmony and foster teamwork.",
    ),
    profile(
        8,
        [Moderate, Moderate, Moderate, Moderate, High],
        "This individual effectively balances social interaction and solitude. They take a measured approach, balancing curiosity with practicality. In their work, they maintain a good balance between structure and flexibility. They handle pressure by balancing calmness with occasional stress, while naturally prioritizing harmony and fostering teamwork.",
    ),
    profile(
        9,
        [High, Moderate, Low, High, Moderate],
        "This person is energized by social activities and groups. They balance curiosity with practicality when approaching new situations. While preferring flexibility and adapting well to unstructured tasks, they remain resilient, calm, and composed under stress. They maintain a balanced approach, combining cooperation with assertiveness.",
    ),
    profile(
        10,
        [High, Low, High, High, High],
        "Energized by social activities and groups, this individual prefers routines and practical solutions. They are notably goal-driven, organized, and dependable. They maintain resilience and composure under stress, while consistently prioritizing harmony and fostering teamwork.",
    ),
    profile(
        11,
        [Moderate, Moderate, High, Moderate, High],
        "This person balances social interaction and solitude effectively. They approach new experiences by balancing curiosity with practicality. In their work, they are goal-driven, organized, and dependable. They balance calmness with occasional stress, while prioritizing harmony and fostering teamwork.",
    ),
    profile(
        12,
        [Low, Moderate, High, Low, High],
        "Preferring quiet settings and solitude, this individual balances curiosity with practicality. They are goal-driven, organized, and dependable. While sensitive to stress and experiencing emotional fluctuations, they consistently prioritize harmony and foster teamwork.",
    ),
    profile(
        13,
        [Low, Moderate, Low, Moderate, Moderate],
        "This person tends to prefer quiet settings and solitude. They take a balanced approach, combining curiosity with practicality. When it comes to tasks, they prefer flexibility and adapt well to unstructured situations. They balance calmness with occasional stress, while maintaining a balanced approach to cooperation and assertiveness.",
    ),
    profile(
        14,
        [Moderate, High, Low, High, Low],
        "Balancing social interaction and solitude, this individual shows creativity and curiosity, staying open to new ideas. They prefer flexibility and adapt well to unstructured tasks. While resilient, calm, and composed under stress, they tend to focus on personal goals and communicate directly.",
    ),
    profile(
        15,
        [Moderate, High, High, High, Moderate],
        "This person balances social interaction and solitude effectively. They show creativity and curiosity, remaining open to new ideas. At work, they are goal-driven, organized, and dependable. They maintain resilience and composure under stress, while balancing cooperation with assertiveness.",
    ),
    profile(
        16,
        [Moderate, High, Moderate, Moderate, Moderate],
        "Balancing social interaction and solitude, this person demonstrates creativity and curiosity, staying open to new ideas. They maintain a good balance between structure and flexibility in their work. They balance calmness with occasional stress, while combining cooperation with assertiveness.",
    ),
    profile(
        17,
        [High, High, High, Low, High],
        "This individual is energized by social activities and groups. They show creativity and curiosity, remaining open to new ideas. They are goal-driven, organized, and dependable. While sensitive to stress and experiencing emotional fluctuations, they consistently prioritize harmony and foster teamwork.",
    ),
    profile(
        18,
        [High, High, High, Moderate, Moderate],
        "Energized by social activities and groups, this person shows creativity and curiosity, staying open to new ideas. They are goal-driven, organized, and dependable. They balance calmness with occasional stress, while maintaining a balanced approach to cooperation and assertiveness.",
    ),
    profile(
        19,
        [Low, Low, Moderate, High, High],
        "This person prefers quiet settings and solitude. They favor routines and practical solutions when approaching new experiences. In their work, they balance structure with flexibility. They remain resilient, calm, and composed under stress, while consistently prioritizing harmony and fostering teamwork.",
    ),
    ]
};
