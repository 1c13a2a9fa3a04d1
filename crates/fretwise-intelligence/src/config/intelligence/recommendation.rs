// ABOUTME: Recommendation engine configuration for personalized practice suggestions
// ABOUTME: Configures per-rule triggers, priorities, and time estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Recommendation Engine Configuration
//!
//! One block per rule: the trigger threshold, the priority assigned, and the
//! estimated minutes shown to the user.

use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// How many of the top weak areas get an exercise
    pub max_weak_area_exercises: usize,
    /// Minutes for a weak-area exercise
    pub weak_area_minutes: u32,
    /// Days since the last session after which a review is suggested
    pub staleness_days: f64,
    /// Days assumed when there is no history at all
    pub no_history_days: f64,
    /// Minutes for a review
    pub review_minutes: u32,
    /// Average accuracy required for a level-up lesson
    pub level_up_accuracy: f64,
    /// Sessions that must be exceeded for a level-up lesson
    pub level_up_min_sessions: usize,
    /// Priority of a level-up lesson
    pub level_up_priority: u8,
    /// Minutes for a level-up lesson
    pub level_up_minutes: u32,
    /// Recent sessions inspected for variety
    pub variety_window: usize,
    /// Sessions of one category in the window above which variety is nudged
    pub variety_max_share: usize,
    /// Priority of the variety nudge
    pub variety_priority: u8,
    /// Minutes for the variety nudge
    pub variety_minutes: u32,
    /// Share of history below which ear training is recommended
    pub ear_training_min_share: f64,
    /// Priority of the ear-training floor
    pub ear_training_priority: u8,
    /// Minutes for the ear-training floor
    pub ear_training_minutes: u32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_weak_area_exercises: 3,
            weak_area_minutes: 15,
            staleness_days: 2.0,
            no_history_days: 999.0,
            review_minutes: 20,
            level_up_accuracy: 80.0,
            level_up_min_sessions: 10,
            level_up_priority: 7,
            level_up_minutes: 30,
            variety_window: 10,
            variety_max_share: 7,
            variety_priority: 5,
            variety_minutes: 15,
            ear_training_min_share: 0.2,
            ear_training_priority: 6,
            ear_training_minutes: 10,
        }
    }
}
