// ABOUTME: Chronologically ordered view over a practice session snapshot
// ABOUTME: Gives every analyzer the same notion of "recent", "older", and "last session"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use chrono::{DateTime, Utc};
use fretwise_core::constants::time::SECONDS_PER_DAY;
use fretwise_core::models::{PracticeSession, SkillCategory};

use crate::statistical_analysis::StatisticalAnalyzer;

/// Borrowed, oldest-first view over a session history
///
/// Callers may pass sessions in any order (stores return newest first); the
/// view sorts a copy of the references with a stable sort so sessions sharing
/// a timestamp keep their input order.
#[derive(Debug, Clone)]
pub struct SessionHistory<'a> {
    sessions: Vec<&'a PracticeSession>,
}

impl<'a> SessionHistory<'a> {
    /// Build a chronological view over `sessions`
    #[must_use]
    pub fn new(sessions: &'a [PracticeSession]) -> Self {
        let mut sorted: Vec<&PracticeSession> = sessions.iter().collect();
        sorted.sort_by_key(|session| session.timestamp);
        Self { sessions: sorted }
    }

    /// Number of sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether there are no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// All sessions, oldest first
    #[must_use]
    pub fn sessions(&self) -> &[&'a PracticeSession] {
        &self.sessions
    }

    /// The last `n` sessions (or all of them when fewer exist)
    #[must_use]
    pub fn recent(&self, n: usize) -> &[&'a PracticeSession] {
        let start = self.sessions.len().saturating_sub(n);
        &self.sessions[start..]
    }

    /// Everything before the last `n` sessions
    #[must_use]
    pub fn older(&self, n: usize) -> &[&'a PracticeSession] {
        let end = self.sessions.len().saturating_sub(n);
        &self.sessions[..end]
    }

    /// Most recent session
    #[must_use]
    pub fn last_session(&self) -> Option<&'a PracticeSession> {
        self.sessions.last().copied()
    }

    /// Mean accuracy over the whole history, 0.0 when empty
    #[must_use]
    pub fn average_accuracy(&self) -> f64 {
        StatisticalAnalyzer::mean(&accuracies(&self.sessions))
    }

    /// Sessions belonging to `category`, oldest first
    pub fn in_category(
        &self,
        category: SkillCategory,
    ) -> impl Iterator<Item = &'a PracticeSession> + '_ {
        self.sessions
            .iter()
            .copied()
            .filter(move |session| session.category == category)
    }

    /// Fractional days between the most recent session and `now`
    #[must_use]
    pub fn days_since_last_session(&self, now: DateTime<Utc>) -> Option<f64> {
        self.last_session()
            .map(|session| days_between(session.timestamp, now))
    }
}

/// Accuracy values of the given sessions, in order
#[must_use]
pub fn accuracies(sessions: &[&PracticeSession]) -> Vec<f64> {
    sessions.iter().map(|session| session.accuracy).collect()
}

/// Count sessions in `category`
#[must_use]
pub fn count_in_category(sessions: &[&PracticeSession], category: SkillCategory) -> usize {
    sessions
        .iter()
        .filter(|session| session.category == category)
        .count()
}

/// Fractional days from `earlier` to `later`
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: millisecond spans of realistic histories
pub fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}
