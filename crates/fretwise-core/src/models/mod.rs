// ABOUTME: Core data models for practice sessions, profiles, recommendations, and training plans
// ABOUTME: Plain serializable records with no behavior beyond validation and small helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! # Data Models
//!
//! Records exchanged between the session store, the analytics engine, and
//! the UI/tutoring layers.

mod profile;
mod recommendation;
mod session;
mod training;
mod weak_area;

pub use profile::{LearningPace, ProgressionRate, UserProfile};
pub use recommendation::{Recommendation, RecommendationKind};
pub use session::{
    DifficultyTier, PracticeSession, PracticeSessionBuilder, PracticeSessionDraft, SkillCategory,
};
pub use training::{DailyTrainingPlan, ModuleCategory, TrainingModule};
pub use weak_area::{Trend, WeakArea};
