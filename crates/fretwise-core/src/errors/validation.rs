// ABOUTME: Validation error types for practice sessions entering the session store
// ABOUTME: Rejects malformed records (accuracy or duration out of range, missing timestamp) at the store boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! # Validation Errors
//!
//! The analyzer assumes clean input, so malformed session records are
//! rejected before they are appended to history.

use super::ErrorCode;
use thiserror::Error;

/// Errors raised when a practice session record fails validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Accuracy must be a finite percentage between 0 and 100
    #[error("accuracy {value} is outside the accepted range [0, 100]")]
    AccuracyOutOfRange {
        /// Rejected accuracy value
        value: f64,
    },

    /// Duration exceeds the longest accepted session
    #[error("duration {value}s exceeds the maximum of {max}s")]
    DurationOutOfRange {
        /// Rejected duration in seconds
        value: u64,
        /// Largest accepted duration in seconds
        max: u64,
    },

    /// The session has no timestamp
    #[error("practice session is missing its timestamp")]
    MissingTimestamp,

    /// A required field is missing or empty
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A field has a value that cannot be interpreted
    #[error("invalid value for {field}: {reason}")]
    InvalidField {
        /// Name of the invalid field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ValidationError {
    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Error code used when this error is surfaced as an `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::AccuracyOutOfRange { .. } | Self::DurationOutOfRange { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::MissingTimestamp | Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidField { .. } => ErrorCode::InvalidInput,
        }
    }
}
