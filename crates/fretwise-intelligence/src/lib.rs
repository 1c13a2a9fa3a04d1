// ABOUTME: Practice analytics engine: weak areas, profiles, recommendations, and daily plans
// ABOUTME: Pure computation over history snapshots; storage and I/O live in the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![deny(unsafe_code)]

//! # Fretwise Intelligence
//!
//! Every operation here is a function of a session history snapshot and/or a
//! profile snapshot. Nothing blocks on I/O and no state is retained between
//! calls. Randomized steps take the caller's `rand::Rng` so tests can seed them.
//!
//! Data flow:
//!
//! ```text
//! sessions -> WeakAreaAnalyzer --+
//!          -> ProfileBuilder ----+-> RecommendationEngine
//! profile + ModuleCatalog -> DailyPlanBuilder
//! ```

/// Validated engine configuration
pub mod config;
/// Daily plan builder
pub mod daily_plan;
/// Chronological history view
pub mod history;
/// Practice insights
pub mod insights;
/// Module catalog and affinity table
pub mod module_catalog;
/// Profile builder
pub mod profile_builder;
/// Recommendation engine
pub mod recommendation_engine;
/// Descriptive statistics
pub mod statistical_analysis;
/// Training analyzer
pub mod training_analyzer;
/// Weak-area analyzer
pub mod weak_area_analyzer;

pub use config::IntelligenceConfig;
pub use daily_plan::DailyPlanBuilder;
pub use history::SessionHistory;
pub use insights::{InsightGenerator, InsightKind, PracticeInsight};
pub use module_catalog::{CatalogError, CategoryAffinity, ModuleCatalog};
pub use profile_builder::ProfileBuilder;
pub use recommendation_engine::RecommendationEngine;
pub use training_analyzer::{
    FocusArea, LearningStyle, MotivationLevel, StrongArea, TrainingAnalysis, TrainingAnalyzer,
};
pub use weak_area_analyzer::WeakAreaAnalyzer;
