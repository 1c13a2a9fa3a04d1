// ABOUTME: Persistent user proficiency profile derived from the full practice history
// ABOUTME: Fully recomputed after every recorded session, never patched incrementally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use super::{DifficultyTier, SkillCategory, WeakArea};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How quickly recent accuracy is pulling ahead of the long-run average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearningPace {
    /// Recent accuracy at or below the overall average
    Slow,
    /// Recent accuracy slightly above the overall average
    #[default]
    Medium,
    /// Recent accuracy well above the overall average
    Fast,
}

/// Practice regularity classification, driven by the daily streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionRate {
    /// Short or no streak
    #[default]
    Slow,
    /// At least a week of daily practice
    Steady,
    /// At least two weeks of daily practice
    Fast,
}

impl ProgressionRate {
    /// Adjective used in plan rationale text
    #[must_use]
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::Slow => "gradual",
            Self::Steady => "steady",
            Self::Fast => "rapid",
        }
    }
}

/// User proficiency profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// One level per hour of practice, starting at 1
    pub level: u32,
    /// Sum of all session durations
    pub total_practice_time_seconds: u64,
    /// Mean accuracy across all sessions
    pub average_accuracy: f64,
    /// Categories with mean accuracy above the strong-area bar
    pub strong_areas: BTreeSet<SkillCategory>,
    /// Weak areas computed against this profile
    pub weak_areas: Vec<WeakArea>,
    /// Recent improvement speed
    pub learning_pace: LearningPace,
    /// Most frequently practised difficulty tier
    pub preferred_difficulty_tier: DifficultyTier,
    /// Number of sessions in the history this profile was built from
    #[serde(default)]
    pub total_sessions: usize,
    /// Consecutive practice days ending today or yesterday
    #[serde(default)]
    pub practice_streak_days: u32,
    /// Timestamp of the most recent session
    #[serde(default)]
    pub last_practiced_at: Option<DateTime<Utc>>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: 1,
            total_practice_time_seconds: 0,
            average_accuracy: 0.0,
            strong_areas: BTreeSet::new(),
            weak_areas: Vec::new(),
            learning_pace: LearningPace::Medium,
            preferred_difficulty_tier: DifficultyTier::Beginner,
            total_sessions: 0,
            practice_streak_days: 0,
            last_practiced_at: None,
        }
    }
}

impl UserProfile {
    /// Highest-priority weak area, if any
    #[must_use]
    pub fn top_weak_area(&self) -> Option<&WeakArea> {
        self.weak_areas.first()
    }
}
