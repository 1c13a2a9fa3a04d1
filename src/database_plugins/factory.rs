// ABOUTME: Store factory selecting the in-memory or SQLite backend from a connection string
// ABOUTME: Database enum delegates both store traits to the selected implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Store factory
//!
//! This module provides automatic backend detection and creation based on
//! connection strings.

use async_trait::async_trait;
use fretwise_core::constants::storage::MEMORY_DATABASE_URL;
use fretwise_core::errors::{AppError, AppResult};
use fretwise_core::models::{PracticeSession, SkillCategory, UserProfile};
use tracing::{debug, info};

use super::memory::InMemoryStore;
#[cfg(feature = "sqlite")]
use super::sqlite::SqliteStore;
use super::{ProfileStore, SessionStore};

/// Supported store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Process-local, nothing persisted
    Memory,
    /// SQLite file or `:memory:` database
    SQLite,
}

/// Store instance wrapper that delegates to the appropriate implementation
#[derive(Debug, Clone)]
pub enum Database {
    /// In-memory backend
    Memory(InMemoryStore),
    /// SQLite backend
    #[cfg(feature = "sqlite")]
    SQLite(SqliteStore),
}

impl Database {
    /// Create a store for `database_url` (`memory`, `sqlite:<path>` or `sqlite::memory:`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL format is unsupported
    /// - The `sqlite` feature is disabled and a SQLite URL is given
    /// - The SQLite connection or schema creation fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        debug!("Detecting database type from URL: {database_url}");
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {db_type:?}");

        match db_type {
            DatabaseType::Memory => {
                info!("Using in-memory session store; sessions are not persisted");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            #[cfg(feature = "sqlite")]
            DatabaseType::SQLite => {
                info!("Initializing SQLite database");
                let db = SqliteStore::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
            #[cfg(not(feature = "sqlite"))]
            DatabaseType::SQLite => {
                let err_msg = "SQLite support not enabled. Enable the 'sqlite' feature flag.";
                tracing::error!("{err_msg}");
                Err(AppError::config(err_msg))
            }
        }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (ephemeral)",
            #[cfg(feature = "sqlite")]
            Self::SQLite(_) => "SQLite (local file)",
        }
    }

    /// Get the backend type
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::Memory(_) => DatabaseType::Memory,
            #[cfg(feature = "sqlite")]
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }
}

/// Detect the backend from a connection string
///
/// # Errors
///
/// Returns a configuration error if the URL is neither `memory` nor `sqlite:...`
pub fn detect_database_type(database_url: &str) -> AppResult<DatabaseType> {
    let trimmed = database_url.trim();
    if trimmed.eq_ignore_ascii_case(MEMORY_DATABASE_URL) {
        Ok(DatabaseType::Memory)
    } else if trimmed.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else {
        Err(AppError::config(format!(
            "Unsupported database URL format: {database_url}. \
             Supported formats: memory, sqlite:path/to/db.sqlite, sqlite::memory:"
        )))
    }
}

#[async_trait]
impl SessionStore for Database {
    async fn append(&self, session: PracticeSession) -> AppResult<()> {
        match self {
            Self::Memory(db) => db.append(session).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.append(session).await,
        }
    }

    async fn query(&self, limit: Option<usize>) -> AppResult<Vec<PracticeSession>> {
        match self {
            Self::Memory(db) => db.query(limit).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.query(limit).await,
        }
    }

    async fn query_by_category(
        &self,
        category: SkillCategory,
        limit: Option<usize>,
    ) -> AppResult<Vec<PracticeSession>> {
        match self {
            Self::Memory(db) => db.query_by_category(category, limit).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.query_by_category(category, limit).await,
        }
    }

    async fn count(&self) -> AppResult<usize> {
        match self {
            Self::Memory(db) => db.count().await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.count().await,
        }
    }

    async fn prune_to_most_recent(&self, keep: usize) -> AppResult<usize> {
        match self {
            Self::Memory(db) => db.prune_to_most_recent(keep).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.prune_to_most_recent(keep).await,
        }
    }
}

#[async_trait]
impl ProfileStore for Database {
    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        match self {
            Self::Memory(db) => db.save(profile).await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.save(profile).await,
        }
    }

    async fn load(&self) -> AppResult<Option<UserProfile>> {
        match self {
            Self::Memory(db) => db.load().await,
            #[cfg(feature = "sqlite")]
            Self::SQLite(db) => db.load().await,
        }
    }
}
