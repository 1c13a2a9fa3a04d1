// ABOUTME: Weak-area analyzer ranking under-performing skill categories from session history
// ABOUTME: Uses a per-user adaptive error threshold, staleness, and a recent-vs-older trend signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Weak-Area Analyzer
//!
//! Groups sessions by skill category and flags a category as weak when its
//! error rate exceeds the user's adaptive threshold, when it has not been
//! practised for more than a week, or when it is declining with a non-trivial
//! error rate. Histories shorter than the configured minimum yield no weak
//! areas at all.
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small
#![allow(clippy::cast_possible_truncation)] // Safe: priorities are clamped to 0..=10 first
#![allow(clippy::cast_sign_loss)] // Safe: priorities are clamped to 0..=10 first

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use fretwise_core::constants::time::DAYS_PER_WEEK;
use fretwise_core::models::{PracticeSession, SkillCategory, Trend, UserProfile, WeakArea};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, WeakAreaConfig};
use crate::history::{accuracies, days_between, SessionHistory};
use crate::statistical_analysis::StatisticalAnalyzer;

const MIN_PRIORITY: u8 = 1;
const MAX_PRIORITY: u8 = 10;

/// Running totals for one category
#[derive(Debug)]
struct CategoryStats {
    total: usize,
    error_accumulator: f64,
    last_practiced_at: DateTime<Utc>,
    items: BTreeSet<String>,
}

impl CategoryStats {
    fn new(session: &PracticeSession) -> Self {
        Self {
            total: 0,
            error_accumulator: 0.0,
            last_practiced_at: session.timestamp,
            items: BTreeSet::new(),
        }
    }

    fn record(&mut self, session: &PracticeSession) {
        self.total += 1;
        self.error_accumulator += session.error_fraction();
        self.last_practiced_at = self.last_practiced_at.max(session.timestamp);
        self.items.insert(session.item_name.clone());
    }

    fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.error_accumulator / self.total as f64
    }
}

/// Weak-area analyzer
#[derive(Debug, Clone)]
pub struct WeakAreaAnalyzer {
    config: WeakAreaConfig,
}

impl Default for WeakAreaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WeakAreaAnalyzer {
    /// Create an analyzer using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().weak_area.clone(),
        }
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: WeakAreaConfig) -> Self {
        Self { config }
    }

    /// Analyze weak areas relative to the current time
    #[must_use]
    pub fn analyze(&self, history: &[PracticeSession], profile: &UserProfile) -> Vec<WeakArea> {
        self.analyze_at(history, profile, Utc::now())
    }

    /// Analyze weak areas relative to `now`
    ///
    /// Returns weak areas sorted by priority, highest first. Categories with
    /// equal priority keep the order chord, scale, song, ear-training.
    #[must_use]
    pub fn analyze_at(
        &self,
        history: &[PracticeSession],
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Vec<WeakArea> {
        if history.len() < self.config.min_sessions {
            debug!(
                sessions = history.len(),
                required = self.config.min_sessions,
                "Not enough sessions for weak-area analysis"
            );
            return Vec::new();
        }

        let history = SessionHistory::new(history);
        let mut stats: BTreeMap<SkillCategory, CategoryStats> = BTreeMap::new();
        for session in history.sessions() {
            stats
                .entry(session.category)
                .or_insert_with(|| CategoryStats::new(session))
                .record(session);
        }

        let threshold = self.threshold_for(&history, profile);

        let mut weak_areas: Vec<WeakArea> = stats
            .into_iter()
            .filter_map(|(category, stats)| {
                let error_rate = stats.error_rate();
                let days_since = days_between(stats.last_practiced_at, now).max(0.0);
                let trend = self.detect_trend(&history, category);

                let is_weak = error_rate > threshold
                    || days_since > self.config.stale_after_days
                    || (trend == Trend::Declining
                        && error_rate > self.config.declining_error_floor);
                if !is_weak {
                    return None;
                }

                Some(WeakArea {
                    category,
                    items: stats.items,
                    error_rate,
                    last_practiced_at: stats.last_practiced_at,
                    priority: self.priority(error_rate, days_since, trend),
                    trend,
                })
            })
            .collect();

        weak_areas.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            threshold,
            weak_areas = weak_areas.len(),
            categories = ?weak_areas.iter().map(|w| w.category.as_str()).collect::<Vec<_>>(),
            "Weak-area analysis complete"
        );

        weak_areas
    }

    /// Error-rate cutoff above which a category counts as weak for this user
    ///
    /// Always within the configured clamp (0.15..=0.50 by default).
    #[must_use]
    pub fn adaptive_threshold(&self, history: &[PracticeSession], profile: &UserProfile) -> f64 {
        self.threshold_for(&SessionHistory::new(history), profile)
    }

    fn threshold_for(&self, history: &SessionHistory<'_>, profile: &UserProfile) -> f64 {
        let tuning = &self.config.threshold;
        let mut threshold = tuning.baseline;

        if profile.level <= tuning.beginner_max_level {
            threshold = tuning.beginner;
        } else if profile.level >= tuning.advanced_min_level {
            threshold = tuning.advanced;
        }

        if profile.average_accuracy > tuning.high_accuracy {
            threshold = (threshold - tuning.accuracy_adjustment).max(tuning.min);
        } else if profile.average_accuracy < tuning.low_accuracy {
            threshold = (threshold + tuning.accuracy_adjustment).min(tuning.max);
        }

        if history.len() >= tuning.variability_min_sessions {
            let std_dev = StatisticalAnalyzer::population_std_dev(&accuracies(history.sessions()));
            if std_dev > tuning.variability_std_dev {
                threshold += tuning.variability_adjustment;
            }
        }

        threshold.clamp(tuning.min, tuning.max)
    }

    /// Compare the category's accuracy in the last few sessions overall against everything before
    fn detect_trend(&self, history: &SessionHistory<'_>, category: SkillCategory) -> Trend {
        let window = self.config.recent_window;
        let in_category = |sessions: &[&PracticeSession]| -> Vec<f64> {
            sessions
                .iter()
                .filter(|session| session.category == category)
                .map(|session| session.accuracy)
                .collect()
        };

        let recent = in_category(history.recent(window));
        let older = in_category(history.older(window));
        if recent.len() < self.config.min_trend_points || older.len() < self.config.min_trend_points
        {
            return Trend::Stable;
        }

        let delta = StatisticalAnalyzer::mean(&recent) - StatisticalAnalyzer::mean(&older);
        if delta > self.config.trend_delta {
            Trend::Improving
        } else if delta < -self.config.trend_delta {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    fn priority(&self, error_rate: f64, days_since: f64, trend: Trend) -> u8 {
        let base = (error_rate * 10.0 + days_since / DAYS_PER_WEEK)
            .round()
            .clamp(0.0, f64::from(MAX_PRIORITY)) as u8;

        let adjusted = match trend {
            Trend::Declining => base.saturating_add(self.config.declining_priority_boost),
            Trend::Improving => base
                .saturating_sub(self.config.improving_priority_discount)
                .max(MIN_PRIORITY),
            Trend::Stable => base,
        };

        adjusted.clamp(MIN_PRIORITY, MAX_PRIORITY)
    }
}
