// ABOUTME: Main library entry point for the Fretwise practice intelligence platform
// ABOUTME: Wires session/profile stores, logging, and environment config around the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![deny(unsafe_code)]

//! # Fretwise
//!
//! Guitar practice analytics: weak-area detection, proficiency profiles,
//! ranked practice recommendations, and time-boxed daily training plans.
//!
//! ## Architecture
//!
//! - **`fretwise-core`**: domain models, `AppError`, validation, constants
//! - **`fretwise-intelligence`**: the pure analytics engine
//! - **this crate**: storage plugins, the practice coordinator service,
//!   logging setup, environment configuration, and the binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fretwise::config::environment::EngineConfig;
//! use fretwise::database_plugins::factory::Database;
//! use fretwise::services::PracticeService;
//! use fretwise::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let database = Database::new(&config.database.to_connection_string()).await?;
//!     let service = PracticeService::new(database, config.session_retention);
//!
//!     let profile = service.profile().await?;
//!     println!("Level {} after {} sessions", profile.level, profile.total_sessions);
//!     Ok(())
//! }
//! ```

/// Environment configuration for the storage layer and binaries
pub mod config;

/// Session and profile store plugins
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// Practice coordinator service
pub mod services;

/// Re-export of the shared error types
pub use fretwise_core::errors;

/// Re-export of the domain models
pub use fretwise_core::models;

/// Re-export of the analytics engine
pub use fretwise_intelligence as intelligence;
