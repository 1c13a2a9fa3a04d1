// ABOUTME: Session log commands for fretwise-cli
// ABOUTME: Record, history, and prune operations over the practice session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use anyhow::Result;
use chrono::{DateTime, Utc};
use fretwise::database_plugins::factory::Database;
use fretwise::models::{DifficultyTier, PracticeSessionDraft, SkillCategory};
use fretwise::services::PracticeService;
use serde_json::json;

use crate::helpers::output::print_json;

/// Assemble a draft from command-line arguments; a missing timestamp means now
pub fn draft_from_args(
    category: SkillCategory,
    item_name: String,
    duration_seconds: u64,
    accuracy: f64,
    difficulty_tier: Option<DifficultyTier>,
    timestamp: Option<DateTime<Utc>>,
    id: Option<String>,
) -> PracticeSessionDraft {
    PracticeSessionDraft {
        id,
        timestamp: Some(timestamp.unwrap_or_else(Utc::now)),
        category: Some(category),
        item_name,
        duration_seconds,
        accuracy: Some(accuracy),
        difficulty_tier,
    }
}

pub async fn record(service: &PracticeService<Database>, draft: PracticeSessionDraft) -> Result<()> {
    let recorded = service.record_session(draft).await?;
    print_json(&recorded)
}

pub async fn history(
    service: &PracticeService<Database>,
    limit: usize,
    category: Option<SkillCategory>,
) -> Result<()> {
    let sessions = match category {
        Some(category) => service.history_by_category(category, Some(limit)).await?,
        None => service.history(Some(limit)).await?,
    };
    print_json(&sessions)
}

pub async fn prune(service: &PracticeService<Database>, keep: usize) -> Result<()> {
    let removed = service.prune(keep).await?;
    print_json(&json!({ "removed": removed, "kept": keep }))
}
