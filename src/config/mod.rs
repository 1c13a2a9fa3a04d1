// ABOUTME: Configuration management module for the storage layer and binaries
// ABOUTME: Environment-driven settings; engine thresholds live in fretwise-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Configuration module for Fretwise
//!
//! - **Environment**: database location, session retention, deployment mode
//! - **Intelligence**: re-exported engine configuration (`FRETWISE_*` overrides)

/// Environment configuration
pub mod environment;

pub use environment::{DatabaseUrl, EngineConfig, Environment};
pub use fretwise_intelligence::config::intelligence;
pub use fretwise_intelligence::IntelligenceConfig;
