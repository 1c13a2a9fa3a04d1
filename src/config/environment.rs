// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses DATABASE_URL, session retention, and deployment mode from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Environment-based configuration for the storage layer and binaries

use std::env;
use std::fmt;
use std::path::PathBuf;

use fretwise_core::constants::{env_config, storage};
use fretwise_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// Process-local store, nothing persisted
    Memory,
    /// SQLite database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// SQLite in-memory database (single connection)
    SQLiteMemory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty values and unsupported schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(storage::MEMORY_DATABASE_URL) {
            return Ok(Self::Memory);
        }
        if let Some(path_str) = trimmed.strip_prefix("sqlite:") {
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            return match path_str {
                ":memory:" => Ok(Self::SQLiteMemory),
                "" => Err(AppError::config("sqlite DATABASE_URL is missing a file path")),
                path => Ok(Self::SQLite {
                    path: PathBuf::from(path),
                }),
            };
        }
        Err(AppError::config(format!(
            "Unsupported DATABASE_URL '{trimmed}'. Supported formats: memory, sqlite:path/to/db.sqlite"
        )))
    }

    /// Convert to the connection string understood by the store factory
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Memory => storage::MEMORY_DATABASE_URL.to_owned(),
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
        }
    }

    /// Whether sessions are lost when the process exits
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Memory | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                storage::DEFAULT_SQLITE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(storage::DEFAULT_SQLITE_URL),
            ),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Root crate configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Where sessions and the profile are stored
    pub database: DatabaseUrl,
    /// Maximum number of sessions kept; the oldest are pruned first
    pub session_retention: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseUrl::default(),
            session_retention: storage::DEFAULT_SESSION_RETENTION,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `DATABASE_URL` is unsupported or the
    /// retention cap is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));

        let database = match env::var(env_config::DATABASE_URL) {
            Ok(url) => DatabaseUrl::parse_url(&url)?,
            Err(_) => DatabaseUrl::default(),
        };

        let session_retention = match env::var(env_config::SESSION_RETENTION) {
            Ok(raw) => parse_retention(&raw)?,
            Err(_) => storage::DEFAULT_SESSION_RETENTION,
        };

        let config = Self {
            environment,
            database,
            session_retention,
        };
        info!(
            environment = %config.environment,
            database = %config.database,
            session_retention = config.session_retention,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Replace the database location, keeping everything else
    #[must_use]
    pub fn with_database(mut self, database: DatabaseUrl) -> Self {
        self.database = database;
        self
    }
}

fn parse_retention(raw: &str) -> AppResult<usize> {
    let value: usize = raw.trim().parse().map_err(|_| {
        AppError::config(format!(
            "Invalid {}: '{raw}' is not a non-negative integer",
            env_config::SESSION_RETENTION
        ))
    })?;
    if value == 0 {
        return Err(AppError::config(format!(
            "{} must be greater than zero",
            env_config::SESSION_RETENTION
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database_urls() {
        assert_eq!(DatabaseUrl::parse_url("memory").ok(), Some(DatabaseUrl::Memory));
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").ok(),
            Some(DatabaseUrl::SQLiteMemory)
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/practice.db").ok(),
            Some(DatabaseUrl::SQLite {
                path: PathBuf::from("./data/practice.db")
            })
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/db").is_err());
        assert!(DatabaseUrl::parse_url("sqlite:").is_err());
    }

    #[test]
    fn test_connection_string_round_trips() {
        let url = DatabaseUrl::default();
        assert_eq!(url.to_connection_string(), storage::DEFAULT_SQLITE_URL);
        assert_eq!(DatabaseUrl::parse_url(&url.to_connection_string()).ok(), Some(url));
    }

    #[test]
    fn test_retention_must_be_positive() {
        assert_eq!(parse_retention(" 250 ").ok(), Some(250));
        assert!(parse_retention("0").is_err());
        assert!(parse_retention("-5").is_err());
    }
}
