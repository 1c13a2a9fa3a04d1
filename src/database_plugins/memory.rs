// ABOUTME: In-memory session and profile store for tests and ephemeral runs
// ABOUTME: Tokio RwLock-guarded session vector with the same ordering and pruning rules as SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use fretwise_core::errors::{AppError, AppResult, ErrorCode};
use fretwise_core::models::{PracticeSession, SkillCategory, UserProfile};
use tokio::sync::RwLock;
use tracing::debug;

use super::{ProfileStore, SessionStore};

/// Process-local store; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Sessions in append order
    sessions: Arc<RwLock<Vec<PracticeSession>>>,
    profile: Arc<RwLock<Option<UserProfile>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; among equal timestamps the later append comes first
fn newest_first<'a>(
    sessions: impl DoubleEndedIterator<Item = &'a PracticeSession>,
) -> Vec<&'a PracticeSession> {
    let mut ordered: Vec<&PracticeSession> = sessions.rev().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn append(&self, session: PracticeSession) -> AppResult<()> {
        session.validate()?;
        let mut sessions = self.sessions.write().await;
        if sessions.iter().any(|existing| existing.id == session.id) {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("session '{}' already exists", session.id),
            ));
        }
        debug!(session_id = %session.id, category = %session.category, "Session appended");
        sessions.push(session);
        Ok(())
    }

    async fn query(&self, limit: Option<usize>) -> AppResult<Vec<PracticeSession>> {
        let sessions = self.sessions.read().await;
        Ok(newest_first(sessions.iter())
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn query_by_category(
        &self,
        category: SkillCategory,
        limit: Option<usize>,
    ) -> AppResult<Vec<PracticeSession>> {
        let sessions = self.sessions.read().await;
        Ok(newest_first(sessions.iter())
            .into_iter()
            .filter(|session| session.category == category)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }

    async fn prune_to_most_recent(&self, keep: usize) -> AppResult<usize> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() <= keep {
            return Ok(0);
        }

        let kept_ids: HashSet<String> = newest_first(sessions.iter())
            .into_iter()
            .take(keep)
            .map(|session| session.id.clone())
            .collect();
        let before = sessions.len();
        sessions.retain(|session| kept_ids.contains(&session.id));
        Ok(before - sessions.len())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }

    async fn load(&self) -> AppResult<Option<UserProfile>> {
        Ok(self.profile.read().await.clone())
    }
}
