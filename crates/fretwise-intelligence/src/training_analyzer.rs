// ABOUTME: Training analyzer producing a pedagogical read of the student from practice history
// ABOUTME: Focus areas with severity and tips, proficiencies, learning style, streak, motivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Training Analyzer
//!
//! Complements the weak-area list with coaching material: each weak area gets
//! a severity on a 1-5 scale and a category-specific tip, strong areas get a
//! proficiency score, and the recent category mix is mapped to a learning
//! style. Streak-derived progression and motivation levels drive the closing
//! recommendations.
#![allow(clippy::cast_possible_truncation)] // Safe: values clamped before conversion
#![allow(clippy::cast_sign_loss)] // Safe: values clamped before conversion

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fretwise_core::constants::time::DAYS_PER_WEEK;
use fretwise_core::models::{
    PracticeSession, ProgressionRate, SkillCategory, UserProfile, WeakArea,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{AnalysisConfig, IntelligenceConfig, WeakAreaConfig};
use crate::history::{count_in_category, days_between, SessionHistory};
use crate::profile_builder::practice_streak_days;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::weak_area_analyzer::WeakAreaAnalyzer;

const MIN_SEVERITY: f64 = 1.0;
const MAX_SEVERITY: f64 = 5.0;
const MAX_STALENESS_WEIGHT: f64 = 2.0;
const CHORD_BASICS_ERROR_RATE: f64 = 0.5;
const PROFILE_STRONG_HIGH: u32 = 85;
const PROFILE_STRONG_LOW: u32 = 75;
const PROFILE_STRONG_ACCURACY: f64 = 80.0;

/// Preferred way of absorbing new material, inferred from what the user practises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    /// Scale and fretboard diagram work dominates
    Visual,
    /// Ear training and songs dominate
    Auditory,
    /// Chord drilling dominates
    Kinesthetic,
    /// No clear preference
    Mixed,
}

/// Motivation estimate from the practice streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotivationLevel {
    /// Streak of three days or fewer
    Low,
    /// Streak of four to seven days
    Medium,
    /// Streak longer than a week
    High,
}

/// Area to focus on with a coaching tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    /// Display name of the area
    pub area: String,
    /// Skill category, when the area maps onto one
    pub category: Option<SkillCategory>,
    /// 1 (minor) to 5 (urgent)
    pub severity: u8,
    /// Actionable coaching tip
    pub tip: String,
}

/// Category the user is proficient in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongArea {
    /// Skill category
    pub category: SkillCategory,
    /// Rounded proficiency, 0-100
    pub proficiency: u32,
}

/// Pedagogical analysis of the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAnalysis {
    /// Focus areas, most urgent weak area first
    pub focus_areas: Vec<FocusArea>,
    /// Strong areas sorted by proficiency, highest first
    pub strong_areas: Vec<StrongArea>,
    /// Headline focus for today
    pub suggested_focus: String,
    /// Inferred learning style
    pub learning_style: LearningStyle,
    /// Streak-based progression rate
    pub progression_rate: ProgressionRate,
    /// Streak-based motivation estimate
    pub motivation_level: MotivationLevel,
    /// Consecutive practice days ending today or yesterday
    pub practice_streak_days: u32,
    /// Ordered coaching recommendations
    pub pedagogical_recommendations: Vec<String>,
}

/// Classify a streak into a progression rate
#[must_use]
pub const fn progression_rate_for(streak_days: u32, config: &AnalysisConfig) -> ProgressionRate {
    if streak_days >= config.fast_streak_days {
        ProgressionRate::Fast
    } else if streak_days >= config.steady_streak_days {
        ProgressionRate::Steady
    } else {
        ProgressionRate::Slow
    }
}

/// Training analyzer
#[derive(Debug, Clone)]
pub struct TrainingAnalyzer {
    config: AnalysisConfig,
    weak_area_analyzer: WeakAreaAnalyzer,
}

impl Default for TrainingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingAnalyzer {
    /// Create an analyzer using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.analysis.clone(), global.weak_area.clone())
    }

    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn with_config(config: AnalysisConfig, weak_area_config: WeakAreaConfig) -> Self {
        Self {
            config,
            weak_area_analyzer: WeakAreaAnalyzer::with_config(weak_area_config),
        }
    }

    /// Analyze the student relative to the current time
    #[must_use]
    pub fn analyze(&self, history: &[PracticeSession], profile: &UserProfile) -> TrainingAnalysis {
        self.analyze_at(history, profile, Utc::now())
    }

    /// Analyze the student relative to `now`
    #[must_use]
    pub fn analyze_at(
        &self,
        history: &[PracticeSession],
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> TrainingAnalysis {
        let weak_areas = self.weak_area_analyzer.analyze_at(history, profile, now);
        let view = SessionHistory::new(history);

        let focus_areas = self.focus_areas(&weak_areas, view.len(), now);
        let strong_areas = self.strong_areas(&view, profile);
        let learning_style = self.learning_style(&view);
        let streak = practice_streak_days(&view, now.date_naive());
        let progression_rate = progression_rate_for(streak, &self.config);
        let motivation_level = self.motivation_level(streak);

        let suggested_focus = focus_areas.first().map_or_else(
            || SkillCategory::Chord.label().to_owned(),
            |focus| focus.area.clone(),
        );
        let pedagogical_recommendations =
            pedagogical_recommendations(&focus_areas, learning_style, motivation_level);

        debug!(
            focus_areas = focus_areas.len(),
            strong_areas = strong_areas.len(),
            ?learning_style,
            streak,
            "Training analysis complete"
        );

        TrainingAnalysis {
            focus_areas,
            strong_areas,
            suggested_focus,
            learning_style,
            progression_rate,
            motivation_level,
            practice_streak_days: streak,
            pedagogical_recommendations,
        }
    }

    fn focus_areas(
        &self,
        weak_areas: &[WeakArea],
        history_len: usize,
        now: DateTime<Utc>,
    ) -> Vec<FocusArea> {
        if weak_areas.is_empty() && history_len < self.config.min_sessions {
            return vec![FocusArea {
                area: "Chord Transitions".to_owned(),
                category: Some(SkillCategory::Chord),
                severity: 2,
                tip: "Practise specific transitions with a metronome at reduced speed".to_owned(),
            }];
        }

        weak_areas
            .iter()
            .map(|weak_area| {
                let days_since = days_between(weak_area.last_practiced_at, now).max(0.0);
                FocusArea {
                    area: weak_area.category.label().to_owned(),
                    category: Some(weak_area.category),
                    severity: severity(weak_area.error_rate, days_since),
                    tip: coaching_tip(weak_area.category, weak_area.error_rate).to_owned(),
                }
            })
            .collect()
    }

    fn strong_areas(&self, history: &SessionHistory<'_>, profile: &UserProfile) -> Vec<StrongArea> {
        if history.len() < self.config.min_sessions {
            return Vec::new();
        }

        let mut by_category: BTreeMap<SkillCategory, Vec<f64>> = BTreeMap::new();
        for session in history.sessions() {
            by_category
                .entry(session.category)
                .or_default()
                .push(session.accuracy);
        }

        let mut strong: Vec<StrongArea> = by_category
            .into_iter()
            .filter(|(_, values)| values.len() >= self.config.proficiency_min_sessions)
            .filter_map(|(category, values)| {
                let mean = StatisticalAnalyzer::mean(&values);
                (mean > self.config.proficiency_accuracy).then(|| StrongArea {
                    category,
                    proficiency: mean.round().clamp(0.0, 100.0) as u32,
                })
            })
            .collect();

        let estimated = if profile.average_accuracy > PROFILE_STRONG_ACCURACY {
            PROFILE_STRONG_HIGH
        } else {
            PROFILE_STRONG_LOW
        };
        for category in &profile.strong_areas {
            if !strong.iter().any(|area| area.category == *category) {
                strong.push(StrongArea {
                    category: *category,
                    proficiency: estimated,
                });
            }
        }

        strong.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
        strong
    }

    fn learning_style(&self, history: &SessionHistory<'_>) -> LearningStyle {
        if history.len() < self.config.min_sessions {
            return LearningStyle::Mixed;
        }

        let recent = history.recent(self.config.style_window);
        let count = |category| count_in_category(recent, category) as u32;
        let visual = count(SkillCategory::Scale) * 2;
        let auditory = count(SkillCategory::EarTraining) * 2 + count(SkillCategory::Song);
        let kinesthetic = count(SkillCategory::Chord) * 2;

        let max = visual.max(auditory).max(kinesthetic);
        let threshold = self.config.style_min_score;
        if visual == max && visual > threshold {
            LearningStyle::Visual
        } else if auditory == max && auditory > threshold {
            LearningStyle::Auditory
        } else if kinesthetic == max && kinesthetic > threshold {
            LearningStyle::Kinesthetic
        } else {
            LearningStyle::Mixed
        }
    }

    const fn motivation_level(&self, streak_days: u32) -> MotivationLevel {
        if streak_days > self.config.high_motivation_streak {
            MotivationLevel::High
        } else if streak_days > self.config.medium_motivation_streak {
            MotivationLevel::Medium
        } else {
            MotivationLevel::Low
        }
    }
}

/// Severity 1-5 from error rate (up to 3 points) and staleness (up to 2 points)
fn severity(error_rate: f64, days_since: f64) -> u8 {
    let staleness = (days_since / DAYS_PER_WEEK).min(MAX_STALENESS_WEIGHT);
    (error_rate * 3.0 + staleness)
        .round()
        .clamp(MIN_SEVERITY, MAX_SEVERITY) as u8
}

fn coaching_tip(category: SkillCategory, error_rate: f64) -> &'static str {
    match category {
        SkillCategory::Chord if error_rate > CHORD_BASICS_ERROR_RATE => {
            "Focus on the basic chords first. Practise each chord on its own before working on transitions."
        }
        SkillCategory::Chord => {
            "Practise transitions between common chords with a metronome at reduced speed."
        }
        SkillCategory::Scale => {
            "Practise scales slowly with a metronome. Aim for precision before speed."
        }
        SkillCategory::Song => {
            "Split the song into small sections and master each one before moving on."
        }
        SkillCategory::EarTraining => {
            "Practise interval recognition daily, starting with wide intervals such as fifths and octaves."
        }
    }
}

fn pedagogical_recommendations(
    focus_areas: &[FocusArea],
    learning_style: LearningStyle,
    motivation_level: MotivationLevel,
) -> Vec<String> {
    let mut recommendations: Vec<String> =
        focus_areas.iter().map(|focus| focus.tip.clone()).collect();

    match learning_style {
        LearningStyle::Visual => recommendations
            .push("Use chord diagrams and videos to reinforce what you learn".to_owned()),
        LearningStyle::Auditory => recommendations
            .push("Play along with backing tracks and record your performances".to_owned()),
        LearningStyle::Kinesthetic => recommendations
            .push("Focus on hands-on exercises and physical repetition".to_owned()),
        LearningStyle::Mixed => {}
    }

    match motivation_level {
        MotivationLevel::Low => {
            recommendations.push("Set small goals and celebrate every achievement".to_owned());
            recommendations.push("Practise songs you love to keep your motivation up".to_owned());
        }
        MotivationLevel::High => {
            recommendations.push("Challenge yourself with more advanced techniques".to_owned());
            recommendations.push("Consider going deeper into music theory".to_owned());
        }
        MotivationLevel::Medium => {}
    }

    recommendations
}
