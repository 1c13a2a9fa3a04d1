// ABOUTME: Profile builder deriving the user proficiency profile from the full session history
// ABOUTME: Pure function of history: level, accuracy, pace, preferred tier, strong and weak areas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Profile Builder
//!
//! The profile is never patched incrementally. Accuracy and time statistics
//! are computed first, then the weak-area analyzer runs against that partial
//! profile and its result is attached.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Days, NaiveDate, Utc};
use fretwise_core::models::{
    DifficultyTier, LearningPace, PracticeSession, SkillCategory, UserProfile,
};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, ProfileConfig, WeakAreaConfig};
use crate::history::{accuracies, SessionHistory};
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::weak_area_analyzer::WeakAreaAnalyzer;

/// Builds `UserProfile` snapshots from session history
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    config: ProfileConfig,
    weak_area_analyzer: WeakAreaAnalyzer,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// Create a builder using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.profile.clone(), global.weak_area.clone())
    }

    /// Create a builder with explicit configuration
    #[must_use]
    pub const fn with_config(config: ProfileConfig, weak_area_config: WeakAreaConfig) -> Self {
        Self {
            config,
            weak_area_analyzer: WeakAreaAnalyzer::with_config(weak_area_config),
        }
    }

    /// Build a profile relative to the current time
    #[must_use]
    pub fn build(&self, history: &[PracticeSession]) -> UserProfile {
        self.build_at(history, Utc::now())
    }

    /// Build a profile relative to `now`
    #[must_use]
    pub fn build_at(&self, history: &[PracticeSession], now: DateTime<Utc>) -> UserProfile {
        if history.is_empty() {
            return UserProfile::default();
        }

        let view = SessionHistory::new(history);
        let total_practice_time_seconds = history
            .iter()
            .fold(0_u64, |total, session| total.saturating_add(session.duration_seconds));
        let average_accuracy = view.average_accuracy();

        let mut profile = UserProfile {
            level: self.level_for(total_practice_time_seconds),
            total_practice_time_seconds,
            average_accuracy,
            strong_areas: self.strong_areas(&view),
            weak_areas: Vec::new(),
            learning_pace: self.learning_pace(&view, average_accuracy),
            preferred_difficulty_tier: preferred_difficulty_tier(&view),
            total_sessions: view.len(),
            practice_streak_days: practice_streak_days(&view, now.date_naive()),
            last_practiced_at: view.last_session().map(|session| session.timestamp),
        };

        profile.weak_areas = self.weak_area_analyzer.analyze_at(history, &profile, now);

        debug!(
            level = profile.level,
            average_accuracy = profile.average_accuracy,
            sessions = profile.total_sessions,
            weak_areas = profile.weak_areas.len(),
            "Profile built"
        );

        profile
    }

    /// `floor(total_seconds / seconds_per_level) + 1`
    #[must_use]
    pub fn level_for(&self, total_practice_time_seconds: u64) -> u32 {
        let completed = total_practice_time_seconds / self.config.seconds_per_level.max(1);
        u32::try_from(completed)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    fn learning_pace(&self, history: &SessionHistory<'_>, average_accuracy: f64) -> LearningPace {
        let recent_average =
            StatisticalAnalyzer::mean(&accuracies(history.recent(self.config.recent_window)));
        let delta = recent_average - average_accuracy;
        if delta > self.config.fast_pace_delta {
            LearningPace::Fast
        } else if delta > 0.0 {
            LearningPace::Medium
        } else {
            LearningPace::Slow
        }
    }

    /// Categories whose mean accuracy exceeds the strong-area bar (a single session qualifies)
    fn strong_areas(&self, history: &SessionHistory<'_>) -> BTreeSet<SkillCategory> {
        let mut by_category: BTreeMap<SkillCategory, Vec<f64>> = BTreeMap::new();
        for session in history.sessions() {
            by_category
                .entry(session.category)
                .or_default()
                .push(session.accuracy);
        }

        by_category
            .into_iter()
            .filter(|(_, values)| {
                StatisticalAnalyzer::mean(values) > self.config.strong_area_accuracy
            })
            .map(|(category, _)| category)
            .collect()
    }
}

/// Most frequent tier; ties go to the tier seen first chronologically
fn preferred_difficulty_tier(history: &SessionHistory<'_>) -> DifficultyTier {
    let mut counts: Vec<(DifficultyTier, usize)> = Vec::with_capacity(DifficultyTier::ALL.len());
    for session in history.sessions() {
        match counts
            .iter_mut()
            .find(|(tier, _)| *tier == session.difficulty_tier)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((session.difficulty_tier, 1)),
        }
    }

    let mut best: Option<(DifficultyTier, usize)> = None;
    for (tier, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((tier, count));
        }
    }
    best.map_or(DifficultyTier::Beginner, |(tier, _)| tier)
}

/// Consecutive UTC calendar days with at least one session, ending today or yesterday
#[must_use]
pub fn practice_streak_days(history: &SessionHistory<'_>, today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = history
        .sessions()
        .iter()
        .map(|session| session.timestamp.date_naive())
        .collect();

    let yesterday = today.checked_sub_days(Days::new(1));
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        yesterday.filter(|day| days.contains(day))
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }
    streak
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn builder() -> ProfileBuilder {
        ProfileBuilder::with_config(ProfileConfig::default(), WeakAreaConfig::default())
    }

    #[test]
    fn test_level_boundaries() {
        let builder = builder();
        assert_eq!(builder.level_for(0), 1);
        assert_eq!(builder.level_for(3599), 1);
        assert_eq!(builder.level_for(3600), 2);
        assert_eq!(builder.level_for(7 * 3600 + 12), 8);
    }

    #[test]
    fn test_total_practice_time_saturates() {
        let now = Utc::now();
        let sessions: Vec<PracticeSession> = (1..=2)
            .map(|hours| {
                PracticeSession::builder(SkillCategory::Song, "a", 70.0, now - Duration::hours(hours))
                    .duration_seconds(u64::MAX / 2 + 1)
                    .build()
            })
            .collect();
        let profile = builder().build_at(&sessions, now);
        assert_eq!(profile.total_practice_time_seconds, u64::MAX);
        assert_eq!(profile.level, u32::MAX);
    }

    #[test]
    fn test_preferred_tier_tie_goes_to_first_seen() {
        let now = Utc::now();
        let sessions = vec![
            PracticeSession::builder(SkillCategory::Chord, "a", 70.0, now - Duration::hours(4))
                .difficulty(DifficultyTier::Intermediate)
                .build(),
            PracticeSession::builder(SkillCategory::Chord, "a", 70.0, now - Duration::hours(3))
                .difficulty(DifficultyTier::Beginner)
                .build(),
            PracticeSession::builder(SkillCategory::Chord, "a", 70.0, now - Duration::hours(2))
                .difficulty(DifficultyTier::Beginner)
                .build(),
            PracticeSession::builder(SkillCategory::Chord, "a", 70.0, now - Duration::hours(1))
                .difficulty(DifficultyTier::Intermediate)
                .build(),
        ];
        let history = SessionHistory::new(&sessions);
        assert_eq!(
            preferred_difficulty_tier(&history),
            DifficultyTier::Intermediate
        );
    }

    #[test]
    fn test_streak_counts_back_from_yesterday() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let at = |day: u32| {
            NaiveDate::from_ymd_opt(2025, 3, day)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap()
                .and_utc()
        };
        let sessions: Vec<PracticeSession> = [6, 7, 8, 9, 9]
            .iter()
            .map(|day| PracticeSession::builder(SkillCategory::Song, "riff", 80.0, at(*day)).build())
            .collect();
        let history = SessionHistory::new(&sessions);
        assert_eq!(practice_streak_days(&history, today), 4);

        let later = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert_eq!(practice_streak_days(&history, later), 0);
    }
}
