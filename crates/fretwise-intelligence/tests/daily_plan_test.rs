// ABOUTME: Integration tests for the daily plan builder
// ABOUTME: Covers the difficulty cap, time budget, greedy selection order, affinity table, and text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use fretwise_core::models::{ModuleCategory, SkillCategory, Trend, UserProfile, WeakArea};
use fretwise_intelligence::config::intelligence::{
    AnalysisConfig, PlanningConfig, ProfileConfig, WeakAreaConfig,
};
use fretwise_intelligence::{CategoryAffinity, DailyPlanBuilder, ModuleCatalog, ProfileBuilder};
use helpers::synthetic_sessions::{reference_now, SyntheticSessionBuilder};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn planner() -> DailyPlanBuilder {
    DailyPlanBuilder::with_config(PlanningConfig::default(), AnalysisConfig::default())
}

fn plan_date() -> NaiveDate {
    reference_now().date_naive()
}

fn weak(category: SkillCategory) -> WeakArea {
    WeakArea {
        category,
        items: BTreeSet::new(),
        error_rate: 0.6,
        last_practiced_at: reference_now(),
        priority: 7,
        trend: Trend::Stable,
    }
}

fn profile(total_sessions: usize, average_accuracy: f64) -> UserProfile {
    UserProfile {
        total_sessions,
        average_accuracy,
        ..UserProfile::default()
    }
}

#[test]
fn test_plans_respect_cap_budget_and_prerequisites() {
    helpers::init_test_logging();
    let catalog = ModuleCatalog::builtin();
    let profile_builder =
        ProfileBuilder::with_config(ProfileConfig::default(), WeakAreaConfig::default());

    for seed in 0..200 {
        let mut synthetic = SyntheticSessionBuilder::new(seed);
        let len = synthetic.rng().gen_range(0..40);
        let history = synthetic.random_history(len);
        let profile = profile_builder.build_at(&history, synthetic.now());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let planner = planner();
        let cap = planner.max_difficulty_tier(&profile);
        let plan = planner.build_on(&profile, &catalog, plan_date(), &mut rng);

        assert!(plan.modules.len() <= 3);
        assert!(plan.total_duration_minutes <= 45);
        assert_eq!(
            plan.total_duration_minutes,
            plan.modules.iter().map(|m| m.duration_minutes).sum::<u32>()
        );
        let ids: HashSet<&str> = plan.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), plan.modules.len(), "duplicate module in plan");
        for module in &plan.modules {
            assert!(module.difficulty_tier <= cap, "seed {seed}: {} above cap", module.id);
            if profile.total_sessions < 5 {
                assert!(!module.has_prerequisites());
            }
        }
    }
}

#[test]
fn test_difficulty_cap_ladder() {
    let planner = planner();
    assert_eq!(planner.max_difficulty_tier(&profile(10, 90.0)), 1);
    assert_eq!(planner.max_difficulty_tier(&profile(11, 75.0)), 2);
    assert_eq!(planner.max_difficulty_tier(&profile(21, 85.0)), 3);

    let mut veteran = profile(3, 90.0);
    veteran.level = 6;
    assert_eq!(planner.max_difficulty_tier(&veteran), 5);

    veteran.level = 5;
    assert_eq!(planner.max_difficulty_tier(&veteran), 1);
}

#[test]
fn test_new_user_plan_fills_with_first_eligible_module() {
    let catalog = ModuleCatalog::builtin();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let plan = planner().build_on(&UserProfile::default(), &catalog, plan_date(), &mut rng);

    let ids: Vec<&str> = plan.modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["chords-basic-open"]);
    assert_eq!(plan.total_duration_minutes, 15);
    assert_eq!(plan.focus_label, "Chord Mastery");
    assert_eq!(plan.date, plan_date());
    assert!(plan.rationale.contains("it keeps your practice balanced"));
    assert!(plan.rationale.contains("finger placement"));
    assert!(plan.rationale.contains("gradual progression rate"));
    assert!(plan
        .pedagogical_summary
        .starts_with("Methodology applied: Repetitive practice"));
}

#[test]
fn test_weak_area_module_selected_first() {
    let catalog = ModuleCatalog::builtin();
    let mut profile = profile(12, 75.0);
    profile.weak_areas = vec![weak(SkillCategory::Chord)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let plan = planner().build_on(&profile, &catalog, plan_date(), &mut rng);
    let ids: Vec<&str> = plan.modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["chords-basic-open", "chords-transitions"]);
    assert_eq!(plan.total_duration_minutes, 35);
    assert_eq!(plan.focus_label, "Chord Mastery");
    assert!(plan.rationale.contains("Chords needs attention"));
}

#[test]
fn test_strong_area_review_is_random_but_in_category() {
    let catalog = ModuleCatalog::builtin();
    let mut profile = profile(12, 75.0);
    profile.weak_areas = vec![weak(SkillCategory::Song)];
    profile.strong_areas = BTreeSet::from([SkillCategory::Scale]);

    let mut reviewed = BTreeSet::new();
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let plan = planner().build_on(&profile, &catalog, plan_date(), &mut rng);

        assert_eq!(plan.modules.len(), 2);
        assert_eq!(plan.modules[0].id, "songs-beginner");
        assert_eq!(plan.modules[1].category, ModuleCategory::Scales);
        assert_eq!(plan.total_duration_minutes, 45);
        assert_eq!(plan.focus_label, "Scales and Improvisation");
        reviewed.insert(plan.modules[1].id.clone());
    }
    assert_eq!(reviewed.len(), 2);
}

#[test]
fn test_prerequisite_modules_hidden_from_short_histories() {
    let catalog = ModuleCatalog::builtin();
    let planner = planner();
    let eligible: Vec<&str> = planner
        .eligible_modules(&profile(4, 95.0), &catalog)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(
        eligible,
        vec!["chords-basic-open", "rhythm-basic-strumming", "technique-posture"]
    );

    let eligible = planner.eligible_modules(&profile(5, 50.0), &catalog);
    assert!(eligible.iter().any(|m| m.id == "songs-beginner"));
}

#[test]
fn test_custom_affinity_table_drives_first_pick() {
    let catalog = ModuleCatalog::builtin();
    let affinity = CategoryAffinity::builtin().with_entry(SkillCategory::Chord, ["technique-posture"]);
    let mut profile = profile(6, 60.0);
    profile.weak_areas = vec![weak(SkillCategory::Chord)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let plan = planner()
        .with_affinity(affinity)
        .build_on(&profile, &catalog, plan_date(), &mut rng);
    assert_eq!(plan.modules[0].id, "technique-posture");
}

#[test]
fn test_empty_catalog_plan_is_general_review() {
    let catalog = ModuleCatalog::new(Vec::new()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let plan = planner().build_on(&UserProfile::default(), &catalog, plan_date(), &mut rng);

    assert!(plan.modules.is_empty());
    assert_eq!(plan.total_duration_minutes, 0);
    assert_eq!(plan.focus_label, "General Review");
}
