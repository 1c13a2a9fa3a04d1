// ABOUTME: Synthetic practice session generator for deterministic engine testing
// ABOUTME: Seeded ChaCha8 builder producing realistic histories, category runs, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use fretwise_core::models::{DifficultyTier, PracticeSession, SkillCategory, UserProfile};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const ITEMS: [&str; 6] = ["g-major", "c-major", "a-minor", "blues-box", "wonderwall", "fifths"];

/// Fixed reference instant so time-dependent rules are reproducible
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Builder for synthetic practice histories
///
/// Every history is anchored at `now` and generated from a seed, so the same
/// seed always yields the same sessions.
#[derive(Debug, Clone)]
pub struct SyntheticSessionBuilder {
    rng: ChaCha8Rng,
    now: DateTime<Utc>,
}

impl SyntheticSessionBuilder {
    /// Create a builder anchored at [`reference_now`]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::anchored_at(seed, reference_now())
    }

    /// Create a builder anchored at `now`
    #[must_use]
    pub fn anchored_at(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            now,
        }
    }

    /// Anchor instant
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Access the underlying seeded RNG
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// One session `hours_ago` hours before the anchor
    #[must_use]
    pub fn session(
        &mut self,
        category: SkillCategory,
        accuracy: f64,
        hours_ago: i64,
    ) -> PracticeSession {
        let item = ITEMS.choose(&mut self.rng).copied().unwrap();
        PracticeSession::builder(category, item, accuracy, self.now - Duration::hours(hours_ago))
            .duration_seconds(600)
            .build()
    }

    /// Sessions in one category with the given accuracies, oldest first, one hour apart,
    /// the last one `latest_hours_ago` before the anchor
    #[must_use]
    pub fn category_run(
        &mut self,
        category: SkillCategory,
        accuracies: &[f64],
        latest_hours_ago: i64,
    ) -> Vec<PracticeSession> {
        let count = accuracies.len() as i64;
        accuracies
            .iter()
            .enumerate()
            .map(|(i, accuracy)| {
                self.session(category, *accuracy, latest_hours_ago + count - 1 - i as i64)
            })
            .collect()
    }

    /// Random realistic history spread across the last 30 days
    #[must_use]
    pub fn random_history(&mut self, len: usize) -> Vec<PracticeSession> {
        (0..len)
            .map(|_| {
                let category = *SkillCategory::ALL.choose(&mut self.rng).unwrap();
                let tier = *DifficultyTier::ALL.choose(&mut self.rng).unwrap();
                let accuracy = f64::from(self.rng.gen_range(0_u32..=100));
                let minutes_ago = self.rng.gen_range(0_i64..30 * 24 * 60);
                let duration = self.rng.gen_range(60_u64..=1800);
                let item = ITEMS.choose(&mut self.rng).copied().unwrap();
                PracticeSession::builder(
                    category,
                    item,
                    accuracy,
                    self.now - Duration::minutes(minutes_ago),
                )
                .duration_seconds(duration)
                .difficulty(tier)
                .build()
            })
            .collect()
    }

    /// Random profile with plausible level and accuracy, no cached weak areas
    #[must_use]
    pub fn random_profile(&mut self) -> UserProfile {
        let level = self.rng.gen_range(1_u32..=10);
        UserProfile {
            level,
            total_practice_time_seconds: u64::from(level - 1) * 3600,
            average_accuracy: self.rng.gen_range(0.0..=100.0),
            total_sessions: self.rng.gen_range(0_usize..=40),
            ..UserProfile::default()
        }
    }
}
