// ABOUTME: Core types and constants for the Fretwise practice intelligence platform
// ABOUTME: Foundation crate with error handling, validation, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![deny(unsafe_code)]

//! # Fretwise Core
//!
//! Foundation crate providing shared types for the Fretwise guitar practice
//! engine. It changes infrequently, so the intelligence crate and the
//! storage layer can compile against it independently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `ValidationError`
//! - **models**: practice sessions, profiles, weak areas, recommendations, training plans
//! - **constants**: time conversion, accuracy bounds, storage defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
