// ABOUTME: Practice session record, skill categories, and difficulty tiers
// ABOUTME: Immutable session log entries with validation applied at the store boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

use crate::constants::accuracy::{MAX_ACCURACY, MIN_ACCURACY};
use crate::constants::time::MAX_SESSION_DURATION_SECONDS;
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Closed set of skill domains a practice session can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    /// Chord shapes and transitions
    Chord,
    /// Scales and fretboard patterns
    Scale,
    /// Full song practice
    Song,
    /// Interval and chord recognition by ear
    EarTraining,
}

impl SkillCategory {
    /// Every category, in the fixed evaluation order used by the analyzers
    pub const ALL: [Self; 4] = [Self::Chord, Self::Scale, Self::Song, Self::EarTraining];

    /// Stable identifier used in storage and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chord => "chord",
            Self::Scale => "scale",
            Self::Song => "song",
            Self::EarTraining => "ear-training",
        }
    }

    /// Human-readable label used in generated text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chord => "Chords",
            Self::Scale => "Scales",
            Self::Song => "Songs",
            Self::EarTraining => "Ear Training",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chord" | "chords" => Ok(Self::Chord),
            "scale" | "scales" => Ok(Self::Scale),
            "song" | "songs" => Ok(Self::Song),
            "ear-training" | "ear_training" | "ear" => Ok(Self::EarTraining),
            other => Err(ValidationError::invalid_field(
                "category",
                format!("unknown skill category '{other}'"),
            )),
        }
    }
}

/// Difficulty tier of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Entry level material
    #[default]
    Beginner,
    /// Intermediate material
    Intermediate,
    /// Advanced material
    Advanced,
}

impl DifficultyTier {
    /// Every tier from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// The next tier up; advanced stays advanced
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Beginner => Self::Intermediate,
            Self::Intermediate | Self::Advanced => Self::Advanced,
        }
    }

    /// Stable identifier used in storage and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(ValidationError::invalid_field(
                "difficulty_tier",
                format!("unknown difficulty tier '{other}'"),
            )),
        }
    }
}

/// One completed practice attempt
///
/// Sessions are never mutated after creation; history only grows by
/// appending and shrinks by pruning the oldest entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Unique session identifier
    pub id: String,
    /// When the exercise ended
    pub timestamp: DateTime<Utc>,
    /// Skill domain practised
    pub category: SkillCategory,
    /// Name of the chord, scale, song or exercise
    pub item_name: String,
    /// Time spent in seconds
    pub duration_seconds: u64,
    /// Accuracy percentage in [0, 100]
    pub accuracy: f64,
    /// Difficulty tier of the material
    pub difficulty_tier: DifficultyTier,
}

impl PracticeSession {
    /// Start building a session with a generated id, beginner tier and zero duration
    #[must_use]
    pub fn builder(
        category: SkillCategory,
        item_name: impl Into<String>,
        accuracy: f64,
        timestamp: DateTime<Utc>,
    ) -> PracticeSessionBuilder {
        PracticeSessionBuilder {
            session: Self {
                id: Uuid::new_v4().to_string(),
                timestamp,
                category,
                item_name: item_name.into(),
                duration_seconds: 0,
                accuracy,
                difficulty_tier: DifficultyTier::Beginner,
            },
        }
    }

    /// Check the record invariants enforced at the store boundary
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the accuracy is outside [0, 100] or not
    /// finite, if the duration is longer than one day, or if the id or item
    /// name is empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.accuracy.is_finite()
            || self.accuracy < MIN_ACCURACY
            || self.accuracy > MAX_ACCURACY
        {
            return Err(ValidationError::AccuracyOutOfRange {
                value: self.accuracy,
            });
        }
        if self.duration_seconds > MAX_SESSION_DURATION_SECONDS {
            return Err(ValidationError::DurationOutOfRange {
                value: self.duration_seconds,
                max: MAX_SESSION_DURATION_SECONDS,
            });
        }
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if self.item_name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "item_name" });
        }
        Ok(())
    }

    /// Error contribution of this session in [0, 1]
    #[must_use]
    pub fn error_fraction(&self) -> f64 {
        (MAX_ACCURACY - self.accuracy) / MAX_ACCURACY
    }
}

/// Builder for `PracticeSession`
#[derive(Debug, Clone)]
pub struct PracticeSessionBuilder {
    session: PracticeSession,
}

impl PracticeSessionBuilder {
    /// Override the generated id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.session.id = id.into();
        self
    }

    /// Set the practice duration in seconds
    #[must_use]
    pub const fn duration_seconds(mut self, seconds: u64) -> Self {
        self.session.duration_seconds = seconds;
        self
    }

    /// Set the difficulty tier
    #[must_use]
    pub const fn difficulty(mut self, tier: DifficultyTier) -> Self {
        self.session.difficulty_tier = tier;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> PracticeSession {
        self.session
    }
}

/// Session as submitted by the practice UI, before validation
///
/// Fields the store requires may be absent here; `into_session` rejects
/// drafts that cannot become a valid `PracticeSession`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeSessionDraft {
    /// Optional id; a UUID is generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// When the exercise ended
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Skill domain practised
    #[serde(default)]
    pub category: Option<SkillCategory>,
    /// Name of the practised item
    #[serde(default)]
    pub item_name: String,
    /// Time spent in seconds
    #[serde(default)]
    pub duration_seconds: u64,
    /// Accuracy percentage
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Difficulty tier, beginner when absent
    #[serde(default)]
    pub difficulty_tier: Option<DifficultyTier>,
}

impl PracticeSessionDraft {
    /// Validate the draft and turn it into an immutable session record
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the timestamp, category or accuracy is
    /// missing, or if the resulting session fails `PracticeSession::validate`
    pub fn into_session(self) -> Result<PracticeSession, ValidationError> {
        let timestamp = self.timestamp.ok_or(ValidationError::MissingTimestamp)?;
        let category = self
            .category
            .ok_or(ValidationError::MissingField { field: "category" })?;
        let accuracy = self
            .accuracy
            .ok_or(ValidationError::MissingField { field: "accuracy" })?;

        let session = PracticeSession {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp,
            category,
            item_name: self.item_name,
            duration_seconds: self.duration_seconds,
            accuracy,
            difficulty_tier: self.difficulty_tier.unwrap_or_default(),
        };
        session.validate()?;
        Ok(session)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&SkillCategory::EarTraining).unwrap();
        assert_eq!(json, "\"ear-training\"");
        assert_eq!(
            "ear_training".parse::<SkillCategory>().unwrap(),
            SkillCategory::EarTraining
        );
    }

    #[test]
    fn test_tier_advances_and_saturates() {
        assert_eq!(DifficultyTier::Beginner.next(), DifficultyTier::Intermediate);
        assert_eq!(DifficultyTier::Advanced.next(), DifficultyTier::Advanced);
    }

    #[test]
    fn test_validate_rejects_out_of_range_accuracy() {
        let session = PracticeSession::builder(SkillCategory::Chord, "G", 101.0, Utc::now()).build();
        assert_eq!(
            session.validate(),
            Err(ValidationError::AccuracyOutOfRange { value: 101.0 })
        );

        let nan = PracticeSession::builder(SkillCategory::Chord, "G", f64::NAN, Utc::now()).build();
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlong_duration() {
        let day = PracticeSession::builder(SkillCategory::Song, "Blackbird", 80.0, Utc::now())
            .duration_seconds(MAX_SESSION_DURATION_SECONDS)
            .build();
        assert!(day.validate().is_ok());

        let huge = PracticeSession::builder(SkillCategory::Song, "Blackbird", 80.0, Utc::now())
            .duration_seconds(u64::MAX / 2 + 1)
            .build();
        assert_eq!(
            huge.validate(),
            Err(ValidationError::DurationOutOfRange {
                value: u64::MAX / 2 + 1,
                max: MAX_SESSION_DURATION_SECONDS,
            })
        );
    }

    #[test]
    fn test_draft_without_timestamp_is_rejected() {
        let draft = PracticeSessionDraft {
            category: Some(SkillCategory::Scale),
            item_name: "A minor pentatonic".into(),
            accuracy: Some(70.0),
            ..PracticeSessionDraft::default()
        };
        assert_eq!(
            draft.into_session().unwrap_err(),
            ValidationError::MissingTimestamp
        );
    }

    #[test]
    fn test_draft_generates_id() {
        let draft = PracticeSessionDraft {
            timestamp: Some(Utc::now()),
            category: Some(SkillCategory::Song),
            item_name: "Wonderwall".into(),
            duration_seconds: 300,
            accuracy: Some(88.0),
            ..PracticeSessionDraft::default()
        };
        let session = draft.into_session().unwrap();
        assert!(!session.id.is_empty());
        assert_eq!(session.difficulty_tier, DifficultyTier::Beginner);
    }
}
