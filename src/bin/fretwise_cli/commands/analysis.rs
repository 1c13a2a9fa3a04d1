// ABOUTME: Analysis commands for fretwise-cli
// ABOUTME: Profile, weak areas, recommendations, daily plan, training analysis, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use anyhow::Result;
use fretwise::database_plugins::factory::Database;
use fretwise::services::PracticeService;

use crate::helpers::output::{print_json, seeded_rng};

pub async fn profile(service: &PracticeService<Database>) -> Result<()> {
    print_json(&service.profile().await?)
}

pub async fn weak_areas(service: &PracticeService<Database>) -> Result<()> {
    print_json(&service.weak_areas().await?)
}

pub async fn recommend(service: &PracticeService<Database>, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    print_json(&service.recommendations(&mut rng).await?)
}

pub async fn plan(service: &PracticeService<Database>, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    print_json(&service.daily_plan(&mut rng).await?)
}

pub async fn analyze(service: &PracticeService<Database>) -> Result<()> {
    print_json(&service.training_analysis().await?)
}

pub async fn insights(service: &PracticeService<Database>) -> Result<()> {
    print_json(&service.insights().await?)
}
