// ABOUTME: Recommendation engine turning a profile, weak areas, and history into ranked suggestions
// ABOUTME: Five independent rules (weak areas, staleness, level-up, variety, ear-training floor)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Recommendation engine for personalized practice suggestions
//!
//! Rules are applied in a fixed order and each may contribute independently.
//! The result is sorted by priority with a stable sort, so equal priorities
//! keep rule order. The variety rule is the only randomized step and draws
//! from the caller's random source.
#![allow(clippy::cast_possible_truncation)] // Safe: values clamped to 0..=10 or 0..=100 first
#![allow(clippy::cast_sign_loss)] // Safe: values clamped to non-negative ranges first
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

use chrono::{DateTime, Utc};
use fretwise_core::models::{
    PracticeSession, Recommendation, RecommendationKind, SkillCategory, UserProfile, WeakArea,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, RecommendationConfig};
use crate::history::{count_in_category, SessionHistory};

const MAX_PRIORITY: f64 = 10.0;

/// Recommendation engine with configurable rule thresholds
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().recommendation.clone(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Generate recommendations relative to the current time
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        weak_areas: &[WeakArea],
        history: &[PracticeSession],
        rng: &mut R,
    ) -> Vec<Recommendation> {
        self.generate_at(profile, weak_areas, history, Utc::now(), rng)
    }

    /// Generate recommendations relative to `now`, sorted by priority descending
    #[must_use]
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        weak_areas: &[WeakArea],
        history: &[PracticeSession],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let history = SessionHistory::new(history);
        let mut recommendations = Vec::new();

        self.weak_area_exercises(profile, weak_areas, &mut recommendations);
        recommendations.extend(self.staleness_review(profile, &history, now));
        recommendations.extend(self.level_up(profile, &history));
        recommendations.extend(self.variety_nudge(profile, &history, rng));
        recommendations.extend(self.ear_training_floor(profile, &history));

        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            count = recommendations.len(),
            ids = ?recommendations.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            "Recommendations generated"
        );

        recommendations
    }

    fn weak_area_exercises(
        &self,
        profile: &UserProfile,
        weak_areas: &[WeakArea],
        recommendations: &mut Vec<Recommendation>,
    ) {
        for (index, weak_area) in weak_areas
            .iter()
            .take(self.config.max_weak_area_exercises)
            .enumerate()
        {
            let label = weak_area.category.label();
            recommendations.push(Recommendation {
                id: format!("weak_area_{index}"),
                kind: RecommendationKind::Exercise,
                title: format!("Strengthen {label}"),
                description: format!(
                    "Practise exercises focused on {label} to improve your accuracy"
                ),
                reason: format!(
                    "You had {}% errors in this area",
                    percent(weak_area.error_rate * 100.0)
                ),
                priority: weak_area.priority,
                estimated_minutes: self.config.weak_area_minutes,
                target_category: Some(weak_area.category),
                difficulty_tier: profile.preferred_difficulty_tier,
            });
        }
    }

    fn staleness_review(
        &self,
        profile: &UserProfile,
        history: &SessionHistory<'_>,
        now: DateTime<Utc>,
    ) -> Option<Recommendation> {
        let days = history
            .days_since_last_session(now)
            .unwrap_or(self.config.no_history_days);
        if days <= self.config.staleness_days {
            return None;
        }

        let rounded = days.round();
        Some(Recommendation {
            id: "review_practice".to_owned(),
            kind: RecommendationKind::Review,
            title: "Review Previous Material".to_owned(),
            description: "Revisit what you practised before to consolidate your learning"
                .to_owned(),
            reason: format!("You haven't practised in {rounded} days"),
            priority: rounded.clamp(1.0, MAX_PRIORITY) as u8,
            estimated_minutes: self.config.review_minutes,
            target_category: None,
            difficulty_tier: profile.preferred_difficulty_tier,
        })
    }

    fn level_up(
        &self,
        profile: &UserProfile,
        history: &SessionHistory<'_>,
    ) -> Option<Recommendation> {
        if profile.average_accuracy <= self.config.level_up_accuracy
            || history.len() <= self.config.level_up_min_sessions
        {
            return None;
        }

        let current = profile.preferred_difficulty_tier;
        let next = current.next();
        if next == current {
            return None;
        }

        Some(Recommendation {
            id: "level_up".to_owned(),
            kind: RecommendationKind::Lesson,
            title: "Move Up to the Next Level".to_owned(),
            description: format!("You are ready for {next} challenges"),
            reason: format!(
                "Your average accuracy is {}%",
                percent(profile.average_accuracy)
            ),
            priority: self.config.level_up_priority,
            estimated_minutes: self.config.level_up_minutes,
            target_category: None,
            difficulty_tier: next,
        })
    }

    fn variety_nudge<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        history: &SessionHistory<'_>,
        rng: &mut R,
    ) -> Option<Recommendation> {
        let window = history.recent(self.config.variety_window);
        let (dominant, count) = SkillCategory::ALL
            .iter()
            .map(|category| (*category, count_in_category(window, *category)))
            .fold(None, |best: Option<(SkillCategory, usize)>, candidate| {
                match best {
                    Some(current) if current.1 >= candidate.1 => Some(current),
                    _ => Some(candidate),
                }
            })?;
        if count <= self.config.variety_max_share {
            return None;
        }

        let alternatives: Vec<SkillCategory> = SkillCategory::ALL
            .into_iter()
            .filter(|category| *category != dominant)
            .collect();
        let suggested = *alternatives.choose(rng)?;

        Some(Recommendation {
            id: "variety".to_owned(),
            kind: RecommendationKind::Exercise,
            title: format!("Practise {}", suggested.label()),
            description: "Vary your practice for more balanced development".to_owned(),
            reason: format!("You have been focusing heavily on {}", dominant.label()),
            priority: self.config.variety_priority,
            estimated_minutes: self.config.variety_minutes,
            target_category: Some(suggested),
            difficulty_tier: profile.preferred_difficulty_tier,
        })
    }

    fn ear_training_floor(
        &self,
        profile: &UserProfile,
        history: &SessionHistory<'_>,
    ) -> Option<Recommendation> {
        let ear_sessions = count_in_category(history.sessions(), SkillCategory::EarTraining);
        let floor = history.len() as f64 * self.config.ear_training_min_share;
        if ear_sessions as f64 >= floor {
            return None;
        }

        Some(Recommendation {
            id: "ear_training".to_owned(),
            kind: RecommendationKind::Exercise,
            title: "Ear Training".to_owned(),
            description: "Develop your musical ear with interval and chord exercises".to_owned(),
            reason: "Ear training is fundamental for every musician".to_owned(),
            priority: self.config.ear_training_priority,
            estimated_minutes: self.config.ear_training_minutes,
            target_category: Some(SkillCategory::EarTraining),
            difficulty_tier: profile.preferred_difficulty_tier,
        })
    }
}

/// Round a 0-100 value for display
fn percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}
