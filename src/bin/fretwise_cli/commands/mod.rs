// ABOUTME: Re-exports command modules for fretwise-cli
// ABOUTME: Session log commands and analysis commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

pub mod analysis;
pub mod session;
