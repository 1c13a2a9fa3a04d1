// ABOUTME: Profile builder and training analysis configuration
// ABOUTME: Configures level pacing, strong-area bars, learning pace, streak and insight thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use serde::{Deserialize, Serialize};

/// Profile builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Number of most recent sessions compared against the overall average
    pub recent_window: usize,
    /// Practice seconds per level
    pub seconds_per_level: u64,
    /// Mean accuracy a category must exceed to count as strong
    pub strong_area_accuracy: f64,
    /// Recent-minus-overall accuracy above which the pace is fast
    pub fast_pace_delta: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            recent_window: 10,
            seconds_per_level: 3600,
            strong_area_accuracy: 80.0,
            fast_pace_delta: 5.0,
        }
    }
}

/// Training analyzer and insight configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sessions required before strong areas and learning style are inferred
    pub min_sessions: usize,
    /// Mean accuracy a category must exceed for a proficiency entry
    pub proficiency_accuracy: f64,
    /// Sessions a category needs for a proficiency entry
    pub proficiency_min_sessions: usize,
    /// Recent sessions inspected for learning style
    pub style_window: usize,
    /// Style score a dominant style must exceed
    pub style_min_score: u32,
    /// Streak days for a fast progression rate
    pub fast_streak_days: u32,
    /// Streak days for a steady progression rate
    pub steady_streak_days: u32,
    /// Streak days above which motivation is high
    pub high_motivation_streak: u32,
    /// Streak days above which motivation is medium
    pub medium_motivation_streak: u32,
    /// Days since last session under which practice counts as consistent
    pub consistent_within_days: f64,
    /// Days since last session over which a lapse insight is emitted
    pub lapse_after_days: f64,
    /// Average accuracy above which the user is told to raise the difficulty
    pub high_accuracy: f64,
    /// Average accuracy below which the user is encouraged to keep going
    pub low_accuracy: f64,
    /// Hours practised in the last day above which a volume insight is emitted
    pub daily_hours_milestone: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sessions: 5,
            proficiency_accuracy: 75.0,
            proficiency_min_sessions: 3,
            style_window: 10,
            style_min_score: 2,
            fast_streak_days: 14,
            steady_streak_days: 7,
            high_motivation_streak: 7,
            medium_motivation_streak: 3,
            consistent_within_days: 1.0,
            lapse_after_days: 3.0,
            high_accuracy: 85.0,
            low_accuracy: 60.0,
            daily_hours_milestone: 1.0,
        }
    }
}
