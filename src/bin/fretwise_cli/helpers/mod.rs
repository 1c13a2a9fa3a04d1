// ABOUTME: Helper modules for fretwise-cli
// ABOUTME: JSON output and RNG seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

pub mod output;
