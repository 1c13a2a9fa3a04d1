// ABOUTME: Synthetic practice session seeder for trying the analytics engine without a practice UI
// ABOUTME: Generates a realistic multi-week history across chords, scales, songs, and ear training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Synthetic practice session seeder for Fretwise.
//!
//! Sessions are recorded through the practice service, so the stored profile
//! is rebuilt exactly as it would be for real sessions.
//!
//! Usage:
//! ```bash
//! # Seed 120 sessions over the last 30 days
//! cargo run --bin seed-practice-sessions
//!
//! # Reproducible history
//! cargo run --bin seed-practice-sessions -- --seed 42
//!
//! # More sessions over a longer period, clearing existing sessions first
//! cargo run --bin seed-practice-sessions -- --count 400 --days 90 --reset
//! ```

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use fretwise::config::environment::{DatabaseUrl, EngineConfig};
use fretwise::database_plugins::factory::Database;
use fretwise::database_plugins::SessionStore;
use fretwise::logging::LoggingConfig;
use fretwise::models::{DifficultyTier, PracticeSessionDraft, SkillCategory};
use fretwise::services::PracticeService;
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-practice-sessions",
    about = "Fretwise Synthetic Practice Session Seeder",
    long_about = "Populate the session store with a realistic synthetic practice history"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Number of sessions to generate
    #[arg(long, default_value = "120")]
    count: u32,

    /// Number of days to spread sessions over
    #[arg(long, default_value = "30")]
    days: u32,

    /// Delete existing sessions before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,
}

/// Category configuration for session generation
struct CategoryConfig {
    category: SkillCategory,
    /// Weight for random selection (higher = more common)
    weight: u32,
    /// Duration range in seconds (min, max)
    duration_range: (u64, u64),
    /// Accuracy range at the start of the seeded period
    starting_accuracy: (f64, f64),
    /// Accuracy gained by the end of the seeded period
    improvement: f64,
    items: &'static [&'static str],
}

fn category_configs() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            category: SkillCategory::Chord,
            weight: 35,
            duration_range: (180, 900),
            starting_accuracy: (45.0, 75.0),
            improvement: 15.0,
            items: &["G to C", "C to D", "E minor", "F barre", "Am to Em", "D to A"],
        },
        CategoryConfig {
            category: SkillCategory::Scale,
            weight: 25,
            duration_range: (300, 1200),
            starting_accuracy: (60.0, 85.0),
            improvement: 10.0,
            items: &["C major", "A minor pentatonic", "G major", "E blues"],
        },
        CategoryConfig {
            category: SkillCategory::Song,
            weight: 25,
            duration_range: (600, 1800),
            starting_accuracy: (50.0, 80.0),
            improvement: 8.0,
            items: &["Horse With No Name", "Wonderwall", "Knockin' on Heaven's Door"],
        },
        CategoryConfig {
            category: SkillCategory::EarTraining,
            weight: 15,
            duration_range: (120, 600),
            starting_accuracy: (40.0, 70.0),
            improvement: 20.0,
            items: &["Perfect fifth", "Major third", "Major vs minor chord"],
        },
    ]
}

/// Build weighted selection vector from category configs
fn build_weighted_categories(configs: &[CategoryConfig]) -> Vec<usize> {
    configs
        .iter()
        .enumerate()
        .flat_map(|(index, config)| std::iter::repeat(index).take(config.weight as usize))
        .collect()
}

fn difficulty_for(progress: f64, rng: &mut ChaCha8Rng) -> DifficultyTier {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < progress * 0.3 {
        DifficultyTier::Advanced
    } else if roll < 0.2 + progress * 0.5 {
        DifficultyTier::Intermediate
    } else {
        DifficultyTier::Beginner
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    LoggingConfig::for_cli(args.verbose).init()?;

    let mut config = EngineConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config = config.with_database(DatabaseUrl::parse_url(url)?);
    }

    println!("Fretwise Practice Session Seeder");
    println!("   Database: {}", config.database);
    println!("   Count: {} sessions", args.count);
    println!("   Days: {} days of history", args.days);

    let database = Database::new(&config.database.to_connection_string()).await?;

    if args.reset {
        let removed = database.prune_to_most_recent(0).await?;
        println!("   Reset: removed {removed} existing sessions");
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("   Random seed: {seed}");

    let configs = category_configs();
    let weighted = build_weighted_categories(&configs);
    let days = args.days.max(1);
    let now = Utc::now();

    // Oldest first so the service sees sessions in the order they happened
    let mut offsets: Vec<i64> = (0..args.count)
        .map(|_| rng.gen_range(0..i64::from(days) * 86_400))
        .collect();
    offsets.sort_unstable_by(|a, b| b.cmp(a));

    let service = PracticeService::new(database, config.session_retention);
    let mut by_category: BTreeMap<SkillCategory, u32> = BTreeMap::new();

    for seconds_ago in offsets {
        let index = *weighted.choose(&mut rng).unwrap_or(&0);
        let Some(category_config) = configs.get(index) else {
            continue;
        };
        let progress = 1.0 - seconds_ago as f64 / (f64::from(days) * 86_400.0);

        let (low, high) = category_config.starting_accuracy;
        let accuracy = (rng.gen_range(low..=high) + category_config.improvement * progress)
            .clamp(0.0, 100.0);
        let (min_duration, max_duration) = category_config.duration_range;

        let draft = PracticeSessionDraft {
            id: None,
            timestamp: Some(now - Duration::seconds(seconds_ago)),
            category: Some(category_config.category),
            item_name: (*category_config
                .items
                .choose(&mut rng)
                .unwrap_or(&"Free practice"))
            .to_owned(),
            duration_seconds: rng.gen_range(min_duration..=max_duration),
            accuracy: Some((accuracy * 10.0).round() / 10.0),
            difficulty_tier: Some(difficulty_for(progress, &mut rng)),
        };
        service.record_session_at(draft, now).await?;
        *by_category.entry(category_config.category).or_default() += 1;
    }

    let profile = service.profile().await?;
    info!(
        sessions = profile.total_sessions,
        level = profile.level,
        "Seeding complete"
    );

    println!("Created {} synthetic sessions", args.count);
    println!("Session breakdown:");
    for (category, count) in &by_category {
        println!("   {}: {}", category.label(), count);
    }
    println!(
        "Profile: level {}, average accuracy {:.1}%, {} weak area(s)",
        profile.level,
        profile.average_accuracy,
        profile.weak_areas.len()
    );
    Ok(())
}
