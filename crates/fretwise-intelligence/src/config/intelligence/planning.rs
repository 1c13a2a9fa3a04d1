// ABOUTME: Daily plan builder configuration for time budget and module eligibility
// ABOUTME: Configures the difficulty cap ladder and the coarse prerequisite proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use serde::{Deserialize, Serialize};

/// Daily plan builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Minutes the plan packs modules into
    pub time_budget_minutes: u32,
    /// Sessions required before modules with prerequisites become eligible
    pub prerequisite_min_sessions: usize,
    /// Difficulty cap ladder
    pub difficulty_caps: DifficultyCapConfig,
}

/// Maximum module difficulty a user may be planned into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCapConfig {
    /// Cap when no other rule applies
    pub default_tier: u8,
    /// Average accuracy that must be exceeded for the second tier
    pub developing_accuracy: f64,
    /// Sessions that must be exceeded for the second tier
    pub developing_min_sessions: usize,
    /// Cap granted by the second rung
    pub developing_tier: u8,
    /// Average accuracy that must be exceeded for the third tier
    pub proficient_accuracy: f64,
    /// Sessions that must be exceeded for the third tier
    pub proficient_min_sessions: usize,
    /// Cap granted by the third rung
    pub proficient_tier: u8,
    /// Level that must be exceeded for the override
    pub advanced_min_level: u32,
    /// Average accuracy that must be exceeded for the override
    pub advanced_accuracy: f64,
    /// Cap granted by the override
    pub advanced_tier: u8,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            time_budget_minutes: 45,
            prerequisite_min_sessions: 5,
            difficulty_caps: DifficultyCapConfig::default(),
        }
    }
}

impl Default for DifficultyCapConfig {
    fn default() -> Self {
        Self {
            default_tier: 1,
            developing_accuracy: 70.0,
            developing_min_sessions: 10,
            developing_tier: 2,
            proficient_accuracy: 80.0,
            proficient_min_sessions: 20,
            proficient_tier: 3,
            advanced_min_level: 5,
            advanced_accuracy: 85.0,
            advanced_tier: 5,
        }
    }
}
