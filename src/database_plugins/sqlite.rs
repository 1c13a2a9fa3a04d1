// ABOUTME: SQLite session and profile store backed by an sqlx connection pool
// ABOUTME: Creates its schema on connect; profile persisted as a JSON document under a fixed key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! SQLite database implementation
//!
//! Sessions are ordered by `timestamp_us` (microseconds since the epoch)
//! with `rowid` breaking ties, so equal timestamps come back most recently
//! appended first, matching the in-memory store.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fretwise_core::constants::storage::DEFAULT_PROFILE_KEY;
use fretwise_core::errors::{AppError, AppResult, ErrorCode};
use fretwise_core::models::{PracticeSession, SkillCategory, UserProfile};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use super::{ProfileStore, SessionStore};

const MAX_CONNECTIONS: u32 = 5;

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` (`sqlite:<path>` or `sqlite::memory:`) and run migrations
    ///
    /// The database file and its parent directory are created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection
    /// fails, or a migration statement fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");
        let connection_options = if is_memory {
            database_url.to_owned()
        } else {
            if let Some(parent) = database_url
                .strip_prefix("sqlite:")
                .map(Path::new)
                .and_then(Path::parent)
                .filter(|parent| !parent.as_os_str().is_empty())
            {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            // Ensure SQLite creates the database file if it doesn't exist
            format!("{database_url}?mode=rwc")
        };

        // Each in-memory connection would otherwise get its own empty database
        let max_connections = if is_memory { 1 } else { MAX_CONNECTIONS };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS practice_sessions (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                timestamp_us INTEGER NOT NULL,
                category TEXT NOT NULL,
                item_name TEXT NOT NULL,
                duration_seconds INTEGER NOT NULL,
                accuracy REAL NOT NULL,
                difficulty_tier TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_practice_sessions_timestamp ON practice_sessions(timestamp_us)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_practice_sessions_category ON practice_sessions(category, timestamp_us)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                profile_key TEXT PRIMARY KEY,
                profile_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        info!("SQLite practice schema ready");
        Ok(())
    }
}

/// SQLite treats a negative LIMIT as unbounded
fn sql_limit(limit: Option<usize>) -> i64 {
    limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX))
}

fn row_to_session(row: &SqliteRow) -> AppResult<PracticeSession> {
    let timestamp_str: String = row.try_get("timestamp")?;
    let category_str: String = row.try_get("category")?;
    let tier_str: String = row.try_get("difficulty_tier")?;
    let duration: i64 = row.try_get("duration_seconds")?;

    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map_err(|e| AppError::internal(format!("Invalid session timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok(PracticeSession {
        id: row.try_get("id")?,
        timestamp,
        category: category_str.parse()?,
        item_name: row.try_get("item_name")?,
        duration_seconds: u64::try_from(duration).unwrap_or_default(),
        accuracy: row.try_get("accuracy")?,
        difficulty_tier: tier_str.parse()?,
    })
}

#[async_trait]
impl SessionStore for SqliteStore {
    async fn append(&self, session: PracticeSession) -> AppResult<()> {
        session.validate()?;
        let duration = i64::try_from(session.duration_seconds).map_err(|_| {
            AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("duration {} is too large", session.duration_seconds),
            )
        })?;

        let result = sqlx::query(
            r"
            INSERT INTO practice_sessions (
                id, timestamp, timestamp_us, category, item_name,
                duration_seconds, accuracy, difficulty_tier
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&session.id)
        .bind(session.timestamp.to_rfc3339())
        .bind(session.timestamp.timestamp_micros())
        .bind(session.category.as_str())
        .bind(&session.item_name)
        .bind(duration)
        .bind(session.accuracy)
        .bind(session.difficulty_tier.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(session_id = %session.id, category = %session.category, "Session appended");
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("session '{}' already exists", session.id),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn query(&self, limit: Option<usize>) -> AppResult<Vec<PracticeSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, timestamp, category, item_name, duration_seconds, accuracy, difficulty_tier
            FROM practice_sessions
            ORDER BY timestamp_us DESC, rowid DESC
            LIMIT ?
            ",
        )
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_session).collect()
    }

    async fn query_by_category(
        &self,
        category: SkillCategory,
        limit: Option<usize>,
    ) -> AppResult<Vec<PracticeSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, timestamp, category, item_name, duration_seconds, accuracy, difficulty_tier
            FROM practice_sessions
            WHERE category = ?
            ORDER BY timestamp_us DESC, rowid DESC
            LIMIT ?
            ",
        )
        .bind(category.as_str())
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_session).collect()
    }

    async fn count(&self) -> AppResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM practice_sessions")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    async fn prune_to_most_recent(&self, keep: usize) -> AppResult<usize> {
        let result = sqlx::query(
            r"
            DELETE FROM practice_sessions
            WHERE rowid NOT IN (
                SELECT rowid FROM practice_sessions
                ORDER BY timestamp_us DESC, rowid DESC
                LIMIT ?
            )
            ",
        )
        .bind(sql_limit(Some(keep)))
        .execute(&self.pool)
        .await?;

        Ok(usize::try_from(result.rows_affected()).unwrap_or(usize::MAX))
    }
}

#[async_trait]
impl ProfileStore for SqliteStore {
    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let profile_json = serde_json::to_string(profile)?;
        sqlx::query(
            r"
            INSERT INTO user_profiles (profile_key, profile_json, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(profile_key) DO UPDATE SET
                profile_json = excluded.profile_json,
                updated_at = excluded.updated_at
            ",
        )
        .bind(DEFAULT_PROFILE_KEY)
        .bind(&profile_json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn load(&self) -> AppResult<Option<UserProfile>> {
        let profile_json: Option<String> =
            sqlx::query_scalar("SELECT profile_json FROM user_profiles WHERE profile_key = ?")
                .bind(DEFAULT_PROFILE_KEY)
                .fetch_optional(&self.pool)
                .await?;

        profile_json
            .map(|json| serde_json::from_str(&json).map_err(AppError::from))
            .transpose()
    }
}
