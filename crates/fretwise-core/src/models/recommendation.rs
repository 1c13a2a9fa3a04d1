// ABOUTME: Ranked practice recommendation value type
// ABOUTME: Ephemeral suggestion emitted by the recommendation engine for the UI and tutoring layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use super::{DifficultyTier, SkillCategory};
use serde::{Deserialize, Serialize};

/// Kind of action a recommendation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    /// Targeted practice exercise
    Exercise,
    /// Review of previously practised material
    Review,
    /// New lesson at a higher tier
    Lesson,
    /// Review spread across categories
    ReviewVariety,
}

/// A ranked, actionable suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable identifier of the rule that produced this recommendation
    pub id: String,
    /// What kind of action is suggested
    pub kind: RecommendationKind,
    /// Short title
    pub title: String,
    /// One-sentence description of the suggested practice
    pub description: String,
    /// Why the suggestion was made
    pub reason: String,
    /// Priority in [1, 10], higher is more urgent
    pub priority: u8,
    /// Expected time commitment
    pub estimated_minutes: u32,
    /// Category the suggestion targets, when it targets one
    pub target_category: Option<SkillCategory>,
    /// Difficulty tier the suggestion is pitched at
    pub difficulty_tier: DifficultyTier,
}
