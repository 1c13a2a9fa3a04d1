// ABOUTME: Benchmark fixtures generating realistic practice histories
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Benchmark fixtures for generating practice histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fretwise::models::{DifficultyTier, PracticeSession, SkillCategory};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of practice
    Small,
    /// A committed student's semester
    Medium,
    /// The retention cap territory and beyond
    Large,
}

impl HistorySize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 500,
            Self::Large => 2000,
        }
    }
}

/// Fixed anchor so every run analyzes the same history
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate `count` sessions, oldest first, roughly three per day
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_sessions(count: usize) -> Vec<PracticeSession> {
    let now = bench_now();
    (0..count)
        .map(|index| {
            let category = SkillCategory::ALL[(index * 7 + index / 5) % SkillCategory::ALL.len()];
            let hours_ago = ((count - index) * 8) as i64;
            // Chords lag behind so weak-area detection has something to find
            let base = if category == SkillCategory::Chord { 50.0 } else { 72.0 };
            let accuracy = base + ((index * 37) % 25) as f64;
            let tier = DifficultyTier::ALL[(index / 50) % DifficultyTier::ALL.len()];
            PracticeSession::builder(
                category,
                format!("bench-item-{}", index % 12),
                accuracy,
                now - Duration::hours(hours_ago),
            )
            .id(format!("bench-session-{index}"))
            .duration_seconds(300 + ((index * 131) % 1500) as u64)
            .difficulty(tier)
            .build()
        })
        .collect()
}
