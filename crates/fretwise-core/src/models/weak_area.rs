// ABOUTME: Weak area value type produced by the weak-area analyzer
// ABOUTME: Derived on demand from session history, never persisted independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use super::SkillCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Short-term accuracy direction within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Recent accuracy is clearly above older accuracy
    Improving,
    /// No clear change, or not enough evidence
    #[default]
    Stable,
    /// Recent accuracy is clearly below older accuracy
    Declining,
}

/// An under-performing skill category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakArea {
    /// Skill category flagged as weak
    pub category: SkillCategory,
    /// Distinct item names practised in this category
    pub items: BTreeSet<String>,
    /// Mean error fraction in [0, 1]
    pub error_rate: f64,
    /// Most recent session in this category
    pub last_practiced_at: DateTime<Utc>,
    /// Priority in [1, 10], higher is more urgent
    pub priority: u8,
    /// Accuracy trend detected for this category
    pub trend: Trend,
}
