// ABOUTME: Practice coordinator recording sessions and answering analysis queries
// ABOUTME: Enforces the retention cap and keeps the stored profile in step with the session log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! # Practice service
//!
//! Writes go through `record_session`, which appends, prunes to the
//! retention cap and then rebuilds the profile from the full history.
//! Profile rebuilds are serialised by an async mutex so the last session
//! recorded is always the one reflected in the saved profile.
//!
//! Read operations take a snapshot of the log and hand it to the pure
//! engine components; they never write.

use chrono::{DateTime, Utc};
use fretwise_core::errors::AppResult;
use fretwise_core::models::{
    DailyTrainingPlan, PracticeSession, PracticeSessionDraft, Recommendation, SkillCategory,
    UserProfile, WeakArea,
};
use fretwise_intelligence::{
    DailyPlanBuilder, InsightGenerator, IntelligenceConfig, ModuleCatalog, PracticeInsight,
    ProfileBuilder, RecommendationEngine, TrainingAnalysis, TrainingAnalyzer, WeakAreaAnalyzer,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::database_plugins::{ProfileStore, SessionStore};

/// Result of recording one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecorded {
    /// The stored session, with its generated id when the draft had none
    pub session: PracticeSession,
    /// Sessions removed to stay within the retention cap
    pub pruned: usize,
    /// Profile rebuilt after the append
    pub profile: UserProfile,
}

/// Coordinates a session/profile store with the analytics engine
#[derive(Debug)]
pub struct PracticeService<S> {
    store: S,
    session_retention: usize,
    catalog: ModuleCatalog,
    weak_area_analyzer: WeakAreaAnalyzer,
    profile_builder: ProfileBuilder,
    recommendation_engine: RecommendationEngine,
    plan_builder: DailyPlanBuilder,
    training_analyzer: TrainingAnalyzer,
    insight_generator: InsightGenerator,
    profile_lock: Mutex<()>,
}

impl<S> PracticeService<S>
where
    S: SessionStore + ProfileStore,
{
    /// Create a service using the global intelligence configuration
    #[must_use]
    pub fn new(store: S, session_retention: usize) -> Self {
        Self::with_config(store, session_retention, IntelligenceConfig::global())
    }

    /// Create a service with an explicit intelligence configuration
    #[must_use]
    pub fn with_config(store: S, session_retention: usize, config: &IntelligenceConfig) -> Self {
        Self {
            store,
            session_retention: session_retention.max(1),
            catalog: ModuleCatalog::builtin(),
            weak_area_analyzer: WeakAreaAnalyzer::with_config(config.weak_area.clone()),
            profile_builder: ProfileBuilder::with_config(
                config.profile.clone(),
                config.weak_area.clone(),
            ),
            recommendation_engine: RecommendationEngine::with_config(
                config.recommendation.clone(),
            ),
            plan_builder: DailyPlanBuilder::with_config(
                config.planning.clone(),
                config.analysis.clone(),
            ),
            training_analyzer: TrainingAnalyzer::with_config(
                config.analysis.clone(),
                config.weak_area.clone(),
            ),
            insight_generator: InsightGenerator::with_config(config.analysis.clone()),
            profile_lock: Mutex::new(()),
        }
    }

    /// Replace the module catalog used for daily plans
    #[must_use]
    pub fn with_catalog(mut self, catalog: ModuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Retention cap applied after every append
    #[must_use]
    pub const fn session_retention(&self) -> usize {
        self.session_retention
    }

    /// Record a session relative to the current time
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid draft, `ResourceAlreadyExists`
    /// for a duplicate id, or a storage error
    pub async fn record_session(&self, draft: PracticeSessionDraft) -> AppResult<SessionRecorded> {
        self.record_session_at(draft, Utc::now()).await
    }

    /// Record a session and rebuild the profile relative to `now`
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid draft, `ResourceAlreadyExists`
    /// for a duplicate id, or a storage error
    pub async fn record_session_at(
        &self,
        draft: PracticeSessionDraft,
        now: DateTime<Utc>,
    ) -> AppResult<SessionRecorded> {
        let session = draft.into_session()?;
        self.store.append(session.clone()).await?;

        let mut pruned = 0;
        let count = self.store.count().await?;
        if count > self.session_retention {
            pruned = self
                .store
                .prune_to_most_recent(self.session_retention)
                .await?;
            warn!(
                removed = pruned,
                retention = self.session_retention,
                "Session log exceeded retention cap; oldest sessions pruned"
            );
        }

        let profile = {
            let _guard = self.profile_lock.lock().await;
            let history = self.history_snapshot().await?;
            let profile = self.profile_builder.build_at(&history, now);
            self.store.save(&profile).await?;
            profile
        };

        info!(
            session_id = %session.id,
            category = %session.category,
            accuracy = session.accuracy,
            level = profile.level,
            weak_areas = profile.weak_areas.len(),
            "Practice session recorded"
        );

        Ok(SessionRecorded {
            session,
            pruned,
            profile,
        })
    }

    /// Stored profile, or one built from the current history when none was saved yet
    ///
    /// # Errors
    ///
    /// Returns a storage error if the profile or history cannot be read
    pub async fn profile(&self) -> AppResult<UserProfile> {
        if let Some(profile) = self.store.load().await? {
            return Ok(profile);
        }
        debug!("No stored profile; building from history");
        self.profile_at(Utc::now()).await
    }

    /// Profile built from the current history relative to `now`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn profile_at(&self, now: DateTime<Utc>) -> AppResult<UserProfile> {
        let history = self.history_snapshot().await?;
        Ok(self.profile_builder.build_at(&history, now))
    }

    /// Sessions newest first, optionally limited
    ///
    /// # Errors
    ///
    /// Returns a storage error if the read fails
    pub async fn history(&self, limit: Option<usize>) -> AppResult<Vec<PracticeSession>> {
        self.store.query(limit).await
    }

    /// Sessions of one category, newest first, optionally limited
    ///
    /// # Errors
    ///
    /// Returns a storage error if the read fails
    pub async fn history_by_category(
        &self,
        category: SkillCategory,
        limit: Option<usize>,
    ) -> AppResult<Vec<PracticeSession>> {
        self.store.query_by_category(category, limit).await
    }

    /// Keep only the `keep` most recent sessions and rebuild the profile
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete or profile save fails
    pub async fn prune(&self, keep: usize) -> AppResult<usize> {
        let removed = self.store.prune_to_most_recent(keep).await?;
        let _guard = self.profile_lock.lock().await;
        let history = self.history_snapshot().await?;
        self.store
            .save(&self.profile_builder.build_at(&history, Utc::now()))
            .await?;
        info!(removed, keep, "Session log pruned");
        Ok(removed)
    }

    /// Weak areas relative to the current time
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn weak_areas(&self) -> AppResult<Vec<WeakArea>> {
        self.weak_areas_at(Utc::now()).await
    }

    /// Weak areas relative to `now`, highest priority first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn weak_areas_at(&self, now: DateTime<Utc>) -> AppResult<Vec<WeakArea>> {
        let history = self.history_snapshot().await?;
        let profile = self.profile_builder.build_at(&history, now);
        Ok(self.weak_area_analyzer.analyze_at(&history, &profile, now))
    }

    /// Recommendations relative to the current time
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn recommendations<R: Rng + Send + ?Sized>(
        &self,
        rng: &mut R,
    ) -> AppResult<Vec<Recommendation>> {
        self.recommendations_at(Utc::now(), rng).await
    }

    /// Recommendations relative to `now`, priority descending
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn recommendations_at<R: Rng + Send + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AppResult<Vec<Recommendation>> {
        let history = self.history_snapshot().await?;
        let profile = self.profile_builder.build_at(&history, now);
        Ok(self.recommendation_engine.generate_at(
            &profile,
            &profile.weak_areas,
            &history,
            now,
            rng,
        ))
    }

    /// Today's training plan
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn daily_plan<R: Rng + Send + ?Sized>(
        &self,
        rng: &mut R,
    ) -> AppResult<DailyTrainingPlan> {
        self.daily_plan_at(Utc::now(), rng).await
    }

    /// Training plan for the UTC day containing `now`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn daily_plan_at<R: Rng + Send + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AppResult<DailyTrainingPlan> {
        let profile = self.profile_at(now).await?;
        Ok(self
            .plan_builder
            .build_on(&profile, &self.catalog, now.date_naive(), rng))
    }

    /// Pedagogical analysis relative to the current time
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn training_analysis(&self) -> AppResult<TrainingAnalysis> {
        self.training_analysis_at(Utc::now()).await
    }

    /// Pedagogical analysis relative to `now`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn training_analysis_at(&self, now: DateTime<Utc>) -> AppResult<TrainingAnalysis> {
        let history = self.history_snapshot().await?;
        let profile = self.profile_builder.build_at(&history, now);
        Ok(self.training_analyzer.analyze_at(&history, &profile, now))
    }

    /// Insights relative to the current time
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn insights(&self) -> AppResult<Vec<PracticeInsight>> {
        self.insights_at(Utc::now()).await
    }

    /// Insights relative to `now`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read
    pub async fn insights_at(&self, now: DateTime<Utc>) -> AppResult<Vec<PracticeInsight>> {
        let history = self.history_snapshot().await?;
        let profile = self.profile_builder.build_at(&history, now);
        Ok(self.insight_generator.generate_at(&profile, &history, now))
    }

    /// Full log in append order among equal timestamps, oldest first
    async fn history_snapshot(&self) -> AppResult<Vec<PracticeSession>> {
        let mut sessions = self.store.query(None).await?;
        sessions.reverse();
        Ok(sessions)
    }
}
