// ABOUTME: Daily plan builder packing eligible catalog modules into a time-boxed session
// ABOUTME: Greedy weak-area, strong-area review, then fill selection with template rationale text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Daily Plan Builder
//!
//! Eligibility is decided before selection: a module must sit at or below the
//! user's difficulty cap, and modules with prerequisites need a minimum amount
//! of practice history. The prerequisite rule is a coarse proxy; it does not
//! check which specific modules the user has completed.
//!
//! Selection is greedy and produces at most three modules:
//! 1. the first eligible module addressing the top weak area,
//! 2. a random eligible module from one of the user's strong areas,
//! 3. the first remaining eligible module that still fits the budget.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, Utc};
use fretwise_core::models::{DailyTrainingPlan, ModuleCategory, TrainingModule, UserProfile};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::config::intelligence::{AnalysisConfig, IntelligenceConfig, PlanningConfig};
use crate::module_catalog::{CategoryAffinity, ModuleCatalog};
use crate::training_analyzer::progression_rate_for;

const GENERAL_REVIEW_LABEL: &str = "General Review";

/// Builds a `DailyTrainingPlan` from a profile and the module catalog
#[derive(Debug, Clone)]
pub struct DailyPlanBuilder {
    config: PlanningConfig,
    analysis: AnalysisConfig,
    affinity: CategoryAffinity,
}

impl Default for DailyPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyPlanBuilder {
    /// Create a builder using the global configuration and the built-in affinity table
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.planning.clone(), global.analysis.clone())
    }

    /// Create a builder with explicit configuration and the built-in affinity table
    #[must_use]
    pub fn with_config(config: PlanningConfig, analysis: AnalysisConfig) -> Self {
        Self {
            config,
            analysis,
            affinity: CategoryAffinity::builtin(),
        }
    }

    /// Replace the weak-area to module affinity table
    #[must_use]
    pub fn with_affinity(mut self, affinity: CategoryAffinity) -> Self {
        self.affinity = affinity;
        self
    }

    /// Highest module difficulty tier this profile may be planned into
    #[must_use]
    pub fn max_difficulty_tier(&self, profile: &UserProfile) -> u8 {
        let caps = &self.config.difficulty_caps;
        let sessions = profile.total_sessions;
        let accuracy = profile.average_accuracy;

        let mut tier = if accuracy > caps.proficient_accuracy
            && sessions > caps.proficient_min_sessions
        {
            caps.proficient_tier
        } else if accuracy > caps.developing_accuracy && sessions > caps.developing_min_sessions {
            caps.developing_tier
        } else {
            caps.default_tier
        };

        if profile.level > caps.advanced_min_level && accuracy > caps.advanced_accuracy {
            tier = caps.advanced_tier;
        }
        tier
    }

    /// Eligible modules in catalog order
    #[must_use]
    pub fn eligible_modules<'c>(
        &self,
        profile: &UserProfile,
        catalog: &'c ModuleCatalog,
    ) -> Vec<&'c TrainingModule> {
        let max_tier = self.max_difficulty_tier(profile);
        let history_satisfies_prerequisites =
            profile.total_sessions >= self.config.prerequisite_min_sessions;

        catalog
            .modules()
            .iter()
            .filter(|module| module.difficulty_tier <= max_tier)
            .filter(|module| !module.has_prerequisites() || history_satisfies_prerequisites)
            .collect()
    }

    /// Build today's plan (UTC date)
    #[must_use]
    pub fn build<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        catalog: &ModuleCatalog,
        rng: &mut R,
    ) -> DailyTrainingPlan {
        self.build_on(profile, catalog, Utc::now().date_naive(), rng)
    }

    /// Build the plan for `date`
    #[must_use]
    pub fn build_on<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        catalog: &ModuleCatalog,
        date: NaiveDate,
        rng: &mut R,
    ) -> DailyTrainingPlan {
        let eligible = self.eligible_modules(profile, catalog);
        let budget = self.config.time_budget_minutes;
        let mut selected: Vec<&TrainingModule> = Vec::with_capacity(3);
        let mut used = 0_u32;

        let fits = |module: &TrainingModule, used: u32| used + module.duration_minutes <= budget;
        let is_selected = |selected: &[&TrainingModule], module: &TrainingModule| {
            selected.iter().any(|chosen| chosen.id == module.id)
        };

        // 1. weak-area focus
        if let Some(weak_area) = profile.top_weak_area() {
            if let Some(module) = eligible.iter().copied().find(|module| {
                self.affinity.addresses(weak_area.category, &module.id) && fits(module, used)
            }) {
                used += module.duration_minutes;
                selected.push(module);
            }
        }

        // 2. strong-area review
        let strong_categories: BTreeSet<ModuleCategory> = profile
            .strong_areas
            .iter()
            .map(|category| ModuleCategory::from(*category))
            .collect();
        let review_candidates: Vec<&TrainingModule> = eligible
            .iter()
            .copied()
            .filter(|module| strong_categories.contains(&module.category))
            .filter(|module| !is_selected(&selected, module) && fits(module, used))
            .collect();
        if let Some(module) = review_candidates.choose(rng).copied() {
            used += module.duration_minutes;
            selected.push(module);
        }

        // 3. new material
        if let Some(module) = eligible
            .iter()
            .copied()
            .find(|module| !is_selected(&selected, module) && fits(module, used))
        {
            used += module.duration_minutes;
            selected.push(module);
        }

        let focus_label = focus_label(&selected);
        let rationale = self.rationale(profile, &selected, &focus_label);
        let pedagogical_summary = pedagogical_summary(&selected);

        info!(
            %date,
            modules = ?selected.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            total_minutes = used,
            "Daily plan built"
        );

        DailyTrainingPlan {
            date,
            modules: selected.into_iter().cloned().collect(),
            total_duration_minutes: used,
            focus_label,
            rationale,
            pedagogical_summary,
        }
    }

    fn rationale(
        &self,
        profile: &UserProfile,
        selected: &[&TrainingModule],
        focus_label: &str,
    ) -> String {
        let reason = profile.top_weak_area().map_or_else(
            || "it keeps your practice balanced".to_owned(),
            |weak_area| {
                format!(
                    "your analysis shows that {} needs attention",
                    weak_area.category.label()
                )
            },
        );
        let skills = selected
            .iter()
            .filter_map(|module| module.primary_skill())
            .collect::<Vec<_>>()
            .join(", ");
        let rate = progression_rate_for(profile.practice_streak_days, &self.analysis);

        format!(
            "Today we focus on {focus_label} because {reason}. \
             The selected exercises follow a pedagogical progression that develops {skills}. \
             With your {} progression rate, these sessions suit your current level.",
            rate.adjective()
        )
    }
}

/// Label of the most frequent module category; among ties the later-selected category wins
fn focus_label(selected: &[&TrainingModule]) -> String {
    let mut counts: HashMap<ModuleCategory, usize> = HashMap::new();
    for module in selected {
        *counts.entry(module.category).or_default() += 1;
    }

    let mut best: Option<(ModuleCategory, usize)> = None;
    for module in selected {
        let count = counts.get(&module.category).copied().unwrap_or_default();
        if best.is_none_or(|(_, best_count)| count >= best_count) {
            best = Some((module.category, count));
        }
    }

    best.map_or_else(
        || GENERAL_REVIEW_LABEL.to_owned(),
        |(category, _)| category.focus_label().to_owned(),
    )
}

fn pedagogical_summary(selected: &[&TrainingModule]) -> String {
    let mut methodologies: Vec<&str> = Vec::with_capacity(selected.len());
    for module in selected {
        if !methodologies.contains(&module.methodology.as_str()) {
            methodologies.push(module.methodology.as_str());
        }
    }

    format!(
        "Methodology applied: {}. This approach combines theory and practice, \
         ensuring balanced development of technical and musical skills.",
        methodologies.join(". ")
    )
}
