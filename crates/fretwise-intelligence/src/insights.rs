// ABOUTME: Short typed practice insights from the profile and recent history
// ABOUTME: Consistency, accuracy, strong areas, learning pace, and practice volume in the last day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: practice seconds fit comfortably in f64

use chrono::{DateTime, Duration, Utc};
use fretwise_core::constants::time::SECONDS_PER_HOUR;
use fretwise_core::models::{LearningPace, PracticeSession, UserProfile};
use serde::{Deserialize, Serialize};

use crate::config::intelligence::{AnalysisConfig, IntelligenceConfig};
use crate::history::SessionHistory;

/// What an insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Practised within the last day
    Consistency,
    /// Several days without practice
    PracticeFrequency,
    /// Accuracy is high or low
    Accuracy,
    /// Categories the user excels in
    StrongAreas,
    /// Recent accuracy is pulling ahead quickly
    LearningPace,
    /// Practice volume in the last 24 hours
    PracticeTime,
}

/// One short, user-facing observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeInsight {
    /// Insight type
    pub kind: InsightKind,
    /// Message shown to the user
    pub message: String,
}

impl PracticeInsight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Generates practice insights
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    config: AnalysisConfig,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().analysis.clone(),
        }
    }

    /// Create a generator with an explicit configuration
    #[must_use]
    pub const fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Generate insights relative to the current time
    #[must_use]
    pub fn generate(
        &self,
        profile: &UserProfile,
        history: &[PracticeSession],
    ) -> Vec<PracticeInsight> {
        self.generate_at(profile, history, Utc::now())
    }

    /// Generate insights relative to `now`
    #[must_use]
    pub fn generate_at(
        &self,
        profile: &UserProfile,
        history: &[PracticeSession],
        now: DateTime<Utc>,
    ) -> Vec<PracticeInsight> {
        let view = SessionHistory::new(history);
        let mut insights = Vec::new();

        if let Some(days) = view.days_since_last_session(now) {
            if days < self.config.consistent_within_days {
                insights.push(PracticeInsight::new(
                    InsightKind::Consistency,
                    "Great! You are keeping up a consistent practice routine",
                ));
            } else if days > self.config.lapse_after_days {
                insights.push(PracticeInsight::new(
                    InsightKind::PracticeFrequency,
                    "Try to practise more often for better results",
                ));
            }
        }

        if profile.average_accuracy > self.config.high_accuracy {
            insights.push(PracticeInsight::new(
                InsightKind::Accuracy,
                "Your accuracy is excellent! Consider raising the difficulty",
            ));
        } else if profile.average_accuracy < self.config.low_accuracy {
            insights.push(PracticeInsight::new(
                InsightKind::Accuracy,
                "Keep practising! Consistency brings improvement",
            ));
        }

        if !profile.strong_areas.is_empty() {
            let areas = profile
                .strong_areas
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
                .join(", ");
            insights.push(PracticeInsight::new(
                InsightKind::StrongAreas,
                format!("You are excelling at: {areas}"),
            ));
        }

        if profile.learning_pace == LearningPace::Fast {
            insights.push(PracticeInsight::new(
                InsightKind::LearningPace,
                "You are progressing quickly! Keep it up!",
            ));
        }

        let day_ago = now - Duration::hours(24);
        let seconds_today = view
            .sessions()
            .iter()
            .filter(|session| session.timestamp > day_ago)
            .fold(0_u64, |total, session| total.saturating_add(session.duration_seconds));
        let hours_today = seconds_today as f64 / SECONDS_PER_HOUR as f64;
        if hours_today > self.config.daily_hours_milestone {
            insights.push(PracticeInsight::new(
                InsightKind::PracticeTime,
                format!("You have already practised {hours_today:.1}h today!"),
            ));
        }

        insights
    }
}
