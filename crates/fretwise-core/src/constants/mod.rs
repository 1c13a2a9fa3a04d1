// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for time conversion, accuracy bounds, storage, and service naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Time conversion constants
pub mod time {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u64 = 3600;
    /// Seconds in one day, as a float for fractional-day arithmetic
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days in one week, as a float for recency weighting
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Longest accepted single practice session (one day)
    pub const MAX_SESSION_DURATION_SECONDS: u64 = 86_400;
}

/// Accuracy percentage bounds
pub mod accuracy {
    /// Lowest valid accuracy percentage
    pub const MIN_ACCURACY: f64 = 0.0;
    /// Highest valid accuracy percentage
    pub const MAX_ACCURACY: f64 = 100.0;
}

/// Session store defaults
pub mod storage {
    /// Default retention cap for the session log; older sessions are pruned first
    pub const DEFAULT_SESSION_RETENTION: usize = 1000;
    /// Key under which the single user profile is stored
    pub const DEFAULT_PROFILE_KEY: &str = "default";
    /// `DATABASE_URL` value selecting the in-memory store
    pub const MEMORY_DATABASE_URL: &str = "memory";
    /// Default SQLite database location
    pub const DEFAULT_SQLITE_URL: &str = "sqlite:./data/fretwise.db";
}

/// Service naming used in structured logs
pub mod service_names {
    /// Name of the engine service
    pub const FRETWISE: &str = "fretwise";
}

/// Environment variable names read by the root crate
pub mod env_config {
    /// Database URL (`memory` or `sqlite:<path>`)
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Session retention cap override
    pub const SESSION_RETENTION: &str = "FRETWISE_SESSION_RETENTION";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
