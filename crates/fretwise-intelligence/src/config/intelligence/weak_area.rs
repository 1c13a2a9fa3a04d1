// ABOUTME: Weak-area analyzer configuration including the adaptive error threshold
// ABOUTME: Configures minimum history, trend windows, staleness, and threshold tuning per user level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Weak-Area Analyzer Configuration

use serde::{Deserialize, Serialize};

/// Weak-area analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakAreaConfig {
    /// Fewer sessions than this produce no weak areas
    pub min_sessions: usize,
    /// Number of most recent sessions (overall) treated as "recent" for trends
    pub recent_window: usize,
    /// Points required in both the recent and older split to call a trend
    pub min_trend_points: usize,
    /// Accuracy difference (percentage points) separating a trend from stable
    pub trend_delta: f64,
    /// Days without practice after which a category is flagged regardless of errors
    pub stale_after_days: f64,
    /// Minimum error rate for a declining category to be flagged
    pub declining_error_floor: f64,
    /// Priority added when a category is declining
    pub declining_priority_boost: u8,
    /// Priority removed when a category is improving
    pub improving_priority_discount: u8,
    /// Adaptive threshold tuning
    pub threshold: AdaptiveThresholdConfig,
}

/// Tuning for the per-user error-rate threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveThresholdConfig {
    /// Threshold for mid-level users
    pub baseline: f64,
    /// Threshold for users at or below `beginner_max_level`
    pub beginner: f64,
    /// Threshold for users at or above `advanced_min_level`
    pub advanced: f64,
    /// Highest level still treated as a beginner
    pub beginner_max_level: u32,
    /// Lowest level treated as advanced
    pub advanced_min_level: u32,
    /// Average accuracy above which the threshold tightens
    pub high_accuracy: f64,
    /// Average accuracy below which the threshold loosens
    pub low_accuracy: f64,
    /// Amount the accuracy adjustment moves the threshold
    pub accuracy_adjustment: f64,
    /// Sessions required before accuracy variability is considered
    pub variability_min_sessions: usize,
    /// Standard deviation of accuracy above which the threshold loosens
    pub variability_std_dev: f64,
    /// Amount added for highly variable users
    pub variability_adjustment: f64,
    /// Lower clamp
    pub min: f64,
    /// Upper clamp
    pub max: f64,
}

impl Default for WeakAreaConfig {
    fn default() -> Self {
        Self {
            min_sessions: 5,
            recent_window: 5,
            min_trend_points: 3,
            trend_delta: 5.0,
            stale_after_days: 7.0,
            declining_error_floor: 0.2,
            declining_priority_boost: 2,
            improving_priority_discount: 1,
            threshold: AdaptiveThresholdConfig::default(),
        }
    }
}

impl Default for AdaptiveThresholdConfig {
    fn default() -> Self {
        Self {
            baseline: 0.30,
            beginner: 0.40,
            advanced: 0.20,
            beginner_max_level: 2,
            advanced_min_level: 5,
            high_accuracy: 85.0,
            low_accuracy: 60.0,
            accuracy_adjustment: 0.10,
            variability_min_sessions: 10,
            variability_std_dev: 20.0,
            variability_adjustment: 0.05,
            min: 0.15,
            max: 0.50,
        }
    }
}
