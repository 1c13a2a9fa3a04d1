// ABOUTME: Training module catalog entries and the daily training plan output
// ABOUTME: Modules are static, prerequisite-gated, and read-only at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use super::SkillCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a catalog module
///
/// Wider than `SkillCategory`: the catalog also covers rhythm and technique
/// work that is not tracked as its own practice session category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleCategory {
    /// Chord shapes and transitions
    Chords,
    /// Scales and improvisation
    Scales,
    /// Strumming and fingerpicking
    Rhythm,
    /// Ear training
    EarTraining,
    /// Complete songs
    Songs,
    /// Posture and technique
    Technique,
}

impl ModuleCategory {
    /// Label used for the daily plan focus
    #[must_use]
    pub const fn focus_label(self) -> &'static str {
        match self {
            Self::Chords => "Chord Mastery",
            Self::Scales => "Scales and Improvisation",
            Self::Rhythm => "Rhythm Development",
            Self::EarTraining => "Ear Training",
            Self::Songs => "Musical Repertoire",
            Self::Technique => "Technical Refinement",
        }
    }
}

impl From<SkillCategory> for ModuleCategory {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Chord => Self::Chords,
            SkillCategory::Scale => Self::Scales,
            SkillCategory::Song => Self::Songs,
            SkillCategory::EarTraining => Self::EarTraining,
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chords => "chords",
            Self::Scales => "scales",
            Self::Rhythm => "rhythm",
            Self::EarTraining => "ear-training",
            Self::Songs => "songs",
            Self::Technique => "technique",
        };
        f.write_str(name)
    }
}

/// Static catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingModule {
    /// Unique module identifier
    pub id: String,
    /// Module category
    pub category: ModuleCategory,
    /// Display name
    pub name: String,
    /// What the module covers
    pub description: String,
    /// Difficulty tier from 1 (entry) to 5 (advanced)
    pub difficulty_tier: u8,
    /// Expected duration
    pub duration_minutes: u32,
    /// Modules that should come first
    pub prerequisite_ids: Vec<String>,
    /// Skills developed, most important first
    pub skills: Vec<String>,
    /// Teaching approach used by the module
    pub methodology: String,
}

impl TrainingModule {
    /// Whether the module has any prerequisites
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisite_ids.is_empty()
    }

    /// Headline skill, used in plan rationale text
    #[must_use]
    pub fn primary_skill(&self) -> Option<&str> {
        self.skills.first().map(String::as_str)
    }
}

/// Time-boxed sequence of modules for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrainingPlan {
    /// Day the plan is for
    pub date: NaiveDate,
    /// Selected modules, in selection order
    pub modules: Vec<TrainingModule>,
    /// Sum of selected module durations
    pub total_duration_minutes: u32,
    /// Human label of the dominant module category
    pub focus_label: String,
    /// Why these modules were chosen
    pub rationale: String,
    /// Teaching approaches applied by the plan
    pub pedagogical_summary: String,
}
