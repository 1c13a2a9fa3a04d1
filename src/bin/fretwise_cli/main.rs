// ABOUTME: Fretwise CLI - record practice sessions and query the analytics engine
// ABOUTME: Every command prints JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence
//!
//! Usage:
//! ```bash
//! # Record a session (timestamp defaults to now)
//! fretwise-cli record --category chord --item "G to C" --duration 300 --accuracy 72
//!
//! # Show the stored profile
//! fretwise-cli profile
//!
//! # Weak areas, recommendations and today's plan
//! fretwise-cli weak-areas
//! fretwise-cli recommend --seed 7
//! fretwise-cli plan
//!
//! # Pedagogical analysis and short insights
//! fretwise-cli analyze
//! fretwise-cli insights
//!
//! # Recent sessions, optionally per category
//! fretwise-cli history --limit 20 --category scale
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use fretwise::config::environment::{DatabaseUrl, EngineConfig};
use fretwise::database_plugins::factory::Database;
use fretwise::logging::LoggingConfig;
use fretwise::models::{DifficultyTier, SkillCategory};
use fretwise::services::PracticeService;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fretwise-cli",
    about = "Fretwise guitar practice analytics",
    long_about = "Record guitar practice sessions and get weak areas, recommendations, and daily training plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (`memory`, `sqlite:<path>`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record a completed practice session
    Record {
        /// Skill category (chord, scale, song, ear-training)
        #[arg(long)]
        category: SkillCategory,

        /// Name of the practised item
        #[arg(long)]
        item: String,

        /// Time spent in seconds
        #[arg(long)]
        duration: u64,

        /// Accuracy percentage (0-100)
        #[arg(long)]
        accuracy: f64,

        /// Difficulty tier (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<DifficultyTier>,

        /// When the session ended (RFC 3339, defaults to now)
        #[arg(long)]
        timestamp: Option<DateTime<Utc>>,

        /// Session id (a UUID is generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Show the user proficiency profile
    Profile,

    /// List weak areas, highest priority first
    WeakAreas,

    /// Generate ranked practice recommendations
    Recommend {
        /// Seed for the variety rule (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build today's training plan
    Plan {
        /// Seed for review module selection (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pedagogical analysis: focus areas, learning style, motivation
    Analyze,

    /// Short practice insights
    Insights,

    /// Show recorded sessions, newest first
    History {
        /// Maximum number of sessions
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Only sessions of this category
        #[arg(long)]
        category: Option<SkillCategory>,
    },

    /// Keep only the most recent sessions
    Prune {
        /// Number of sessions to keep
        #[arg(long)]
        keep: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    info!("Fretwise CLI");

    let mut config = EngineConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config = config.with_database(DatabaseUrl::parse_url(url)?);
    }

    let connection_string = config.database.to_connection_string();
    info!("Connecting to database: {connection_string}");
    let database = Database::new(&connection_string)
        .await
        .with_context(|| format!("Failed to open {connection_string}"))?;
    info!("Using {}", database.backend_info());

    let service = PracticeService::new(database, config.session_retention);

    match cli.command {
        Command::Record {
            category,
            item,
            duration,
            accuracy,
            difficulty,
            timestamp,
            id,
        } => {
            let draft = commands::session::draft_from_args(
                category, item, duration, accuracy, difficulty, timestamp, id,
            );
            commands::session::record(&service, draft).await
        }
        Command::Profile => commands::analysis::profile(&service).await,
        Command::WeakAreas => commands::analysis::weak_areas(&service).await,
        Command::Recommend { seed } => commands::analysis::recommend(&service, seed).await,
        Command::Plan { seed } => commands::analysis::plan(&service, seed).await,
        Command::Analyze => commands::analysis::analyze(&service).await,
        Command::Insights => commands::analysis::insights(&service).await,
        Command::History { limit, category } => {
            commands::session::history(&service, limit, category).await
        }
        Command::Prune { keep } => commands::session::prune(&service, keep).await,
    }
}
