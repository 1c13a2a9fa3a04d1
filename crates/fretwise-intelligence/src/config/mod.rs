// ABOUTME: Configuration module for fretwise-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

/// Intelligence engine configuration (weak areas, profile, recommendations, planning)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
