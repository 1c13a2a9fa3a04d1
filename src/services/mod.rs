// ABOUTME: Service layer coordinating the session store with the analytics engine
// ABOUTME: Business logic kept out of the binaries so it can be tested against any store backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

/// Practice session recording and analysis
pub mod practice_service;

pub use practice_service::{PracticeService, SessionRecorded};
