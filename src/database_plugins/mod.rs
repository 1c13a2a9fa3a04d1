// ABOUTME: Storage abstraction layer for practice sessions and the user profile
// ABOUTME: Plugin architecture with in-memory and SQLite backends behind async traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! # Storage plugins
//!
//! The session log is append-only: sessions are never updated, and the only
//! deletion is pruning the oldest entries once the retention cap is reached.
//! Every backend validates sessions before writing, so the analytics engine
//! can assume clean input.

use async_trait::async_trait;
use fretwise_core::errors::AppResult;
use fretwise_core::models::{PracticeSession, SkillCategory, UserProfile};

pub mod factory;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use factory::{detect_database_type, Database, DatabaseType};
pub use memory::InMemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Append-only practice session log
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Validate and append a session
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed sessions, `ResourceAlreadyExists`
    /// for a duplicate id, or a storage error
    async fn append(&self, session: PracticeSession) -> AppResult<()>;

    /// Sessions sorted by timestamp descending (most recently appended first
    /// among equal timestamps), optionally limited
    ///
    /// # Errors
    ///
    /// Returns a storage error if the read fails
    async fn query(&self, limit: Option<usize>) -> AppResult<Vec<PracticeSession>>;

    /// Like `query`, restricted to one category
    ///
    /// # Errors
    ///
    /// Returns a storage error if the read fails
    async fn query_by_category(
        &self,
        category: SkillCategory,
        limit: Option<usize>,
    ) -> AppResult<Vec<PracticeSession>>;

    /// Number of stored sessions
    ///
    /// # Errors
    ///
    /// Returns a storage error if the read fails
    async fn count(&self) -> AppResult<usize>;

    /// Keep only the `keep` most recent sessions; returns how many were removed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails
    async fn prune_to_most_recent(&self, keep: usize) -> AppResult<usize>;
}

/// Single-user profile persistence
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    async fn save(&self, profile: &UserProfile) -> AppResult<()>;

    /// Load the stored profile, if one was ever saved
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    async fn load(&self) -> AppResult<Option<UserProfile>>;
}
