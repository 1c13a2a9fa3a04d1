// ABOUTME: Descriptive statistics shared by the analyzers (mean, population standard deviation)
// ABOUTME: Empty inputs yield zero rather than NaN so downstream thresholds stay well-defined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

/// Stateless statistics helpers
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, 0.0 for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation (divides by `n`), 0.0 for an empty slice
    #[must_use]
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / values.len() as f64;
        variance.sqrt()
    }
}
