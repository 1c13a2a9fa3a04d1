// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, fixed reference time, session builders, and store constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fretwise`

use std::path::Path;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use fretwise::database_plugins::{InMemoryStore, SqliteStore};
use fretwise::intelligence::IntelligenceConfig;
use fretwise::models::{PracticeSession, PracticeSessionDraft, SkillCategory};
use fretwise::services::PracticeService;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant so time-dependent rules are reproducible
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Session with a fixed id, `hours_ago` hours before [`reference_now`]
pub fn session(id: &str, category: SkillCategory, accuracy: f64, hours_ago: i64) -> PracticeSession {
    PracticeSession::builder(
        category,
        "g-major",
        accuracy,
        reference_now() - Duration::hours(hours_ago),
    )
    .id(id)
    .duration_seconds(600)
    .build()
}

/// Draft as the practice UI would submit it, without an id
pub fn draft(category: SkillCategory, accuracy: f64, hours_ago: i64) -> PracticeSessionDraft {
    PracticeSessionDraft {
        id: None,
        timestamp: Some(reference_now() - Duration::hours(hours_ago)),
        category: Some(category),
        item_name: "C to G".to_owned(),
        duration_seconds: 600,
        accuracy: Some(accuracy),
        difficulty_tier: None,
    }
}

/// SQLite store backed by a file under `dir`
pub async fn create_sqlite_store(dir: &Path) -> SqliteStore {
    init_test_logging();
    let url = format!("sqlite:{}", dir.join("practice.db").display());
    SqliteStore::new(&url).await.unwrap()
}

/// Service over a fresh in-memory store with default engine settings
pub fn create_memory_service(retention: usize) -> PracticeService<InMemoryStore> {
    init_test_logging();
    PracticeService::with_config(InMemoryStore::new(), retention, &IntelligenceConfig::default())
}
