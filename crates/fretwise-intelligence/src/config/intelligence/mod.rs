// ABOUTME: Intelligence configuration root combining all analyzer and planner sub-configs
// ABOUTME: Loads defaults, applies FRETWISE_* environment overrides, and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Intelligence Configuration Module
//!
//! Every tunable threshold of the practice engine lives here. Values default to the
//! calibrated constants and can be overridden via environment variables with the
//! `FRETWISE_` prefix. The global instance is loaded once and falls back to defaults
//! when the environment is invalid.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

mod error;
mod planning;
mod profile;
mod recommendation;
mod weak_area;

pub use error::ConfigError;
pub use planning::{DifficultyCapConfig, PlanningConfig};
pub use profile::{AnalysisConfig, ProfileConfig};
pub use recommendation::RecommendationConfig;
pub use weak_area::{AdaptiveThresholdConfig, WeakAreaConfig};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Weak-area detection
    pub weak_area: WeakAreaConfig,
    /// Profile building
    pub profile: ProfileConfig,
    /// Recommendation rules
    pub recommendation: RecommendationConfig,
    /// Daily plan building
    pub planning: PlanningConfig,
    /// Training analysis and insights
    pub analysis: AnalysisConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = &self.weak_area.threshold;
        if threshold.min >= threshold.max {
            return Err(ConfigError::InvalidRange(
                "threshold min must be less than threshold max",
            ));
        }
        if !(0.0..=1.0).contains(&threshold.min) || !(0.0..=1.0).contains(&threshold.max) {
            return Err(ConfigError::ValueOutOfRange(
                "threshold bounds must be within 0.0..=1.0",
            ));
        }
        if threshold.beginner_max_level >= threshold.advanced_min_level {
            return Err(ConfigError::InvalidRange(
                "beginner_max_level must be below advanced_min_level",
            ));
        }
        if threshold.low_accuracy >= threshold.high_accuracy {
            return Err(ConfigError::InvalidRange(
                "threshold low_accuracy must be below high_accuracy",
            ));
        }

        if self.weak_area.recent_window == 0 || self.weak_area.min_trend_points == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weak-area trend windows must be > 0",
            ));
        }

        if self.profile.recent_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "profile recent_window must be > 0",
            ));
        }
        if self.profile.seconds_per_level == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "profile seconds_per_level must be > 0",
            ));
        }

        let share = self.recommendation.ear_training_min_share;
        if !(0.0..=1.0).contains(&share) {
            return Err(ConfigError::ValueOutOfRange(
                "ear_training_min_share must be within 0.0..=1.0",
            ));
        }
        if self.recommendation.variety_max_share > self.recommendation.variety_window {
            return Err(ConfigError::InvalidRange(
                "variety_max_share must not exceed variety_window",
            ));
        }

        if self.planning.time_budget_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan time_budget_minutes must be > 0",
            ));
        }
        let caps = &self.planning.difficulty_caps;
        if !(caps.default_tier <= caps.developing_tier
            && caps.developing_tier <= caps.proficient_tier
            && caps.proficient_tier <= caps.advanced_tier)
        {
            return Err(ConfigError::InvalidRange(
                "difficulty cap tiers must be ascending",
            ));
        }

        if self.analysis.low_accuracy >= self.analysis.high_accuracy {
            return Err(ConfigError::InvalidRange(
                "analysis low_accuracy must be below high_accuracy",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Weak-area detection
        Self::apply_env_var(
            "FRETWISE_WEAK_AREA_MIN_SESSIONS",
            &mut self.weak_area.min_sessions,
        )?;
        Self::apply_env_var(
            "FRETWISE_STALE_AFTER_DAYS",
            &mut self.weak_area.stale_after_days,
        )?;
        Self::apply_env_var(
            "FRETWISE_THRESHOLD_BASELINE",
            &mut self.weak_area.threshold.baseline,
        )?;
        Self::apply_env_var(
            "FRETWISE_THRESHOLD_MIN",
            &mut self.weak_area.threshold.min,
        )?;
        Self::apply_env_var(
            "FRETWISE_THRESHOLD_MAX",
            &mut self.weak_area.threshold.max,
        )?;

        // Profile
        Self::apply_env_var(
            "FRETWISE_STRONG_AREA_ACCURACY",
            &mut self.profile.strong_area_accuracy,
        )?;

        // Recommendations
        Self::apply_env_var(
            "FRETWISE_EAR_TRAINING_MIN_SHARE",
            &mut self.recommendation.ear_training_min_share,
        )?;
        Self::apply_env_var(
            "FRETWISE_VARIETY_MAX_SHARE",
            &mut self.recommendation.variety_max_share,
        )?;

        // Planning
        Self::apply_env_var(
            "FRETWISE_PLAN_TIME_BUDGET_MINUTES",
            &mut self.planning.time_budget_minutes,
        )?;

        Ok(self)
    }
}
