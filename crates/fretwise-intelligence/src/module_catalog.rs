// ABOUTME: Static training module catalog and the skill-category to module affinity table
// ABOUTME: Validates the prerequisite graph (unique ids, known prerequisites, no cycles) on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Module Catalog
//!
//! The catalog is loaded once at process start and is read-only afterwards.
//! Custom catalogs go through [`ModuleCatalog::new`], which rejects duplicate
//! ids, dangling prerequisite references, out-of-range tiers, and cycles.

use std::collections::{BTreeMap, HashMap, HashSet};

use fretwise_core::errors::{AppError, ErrorCode};
use fretwise_core::models::{ModuleCategory, SkillCategory, TrainingModule};
use thiserror::Error;

/// Lowest module difficulty tier
pub const MIN_MODULE_TIER: u8 = 1;
/// Highest module difficulty tier
pub const MAX_MODULE_TIER: u8 = 5;

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two modules share an id
    #[error("duplicate module id '{0}'")]
    DuplicateModule(String),

    /// A prerequisite references a module that is not in the catalog
    #[error("module '{module}' requires unknown module '{prerequisite}'")]
    UnknownPrerequisite {
        /// Module declaring the prerequisite
        module: String,
        /// Missing prerequisite id
        prerequisite: String,
    },

    /// The prerequisite graph contains a cycle through this module
    #[error("prerequisite cycle through module '{0}'")]
    PrerequisiteCycle(String),

    /// Difficulty tier outside 1..=5
    #[error("module '{module}' has difficulty tier {tier}, expected 1..=5")]
    InvalidDifficulty {
        /// Offending module
        module: String,
        /// Declared tier
        tier: u8,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}

struct ModuleEntry {
    id: &'static str,
    category: ModuleCategory,
    name: &'static str,
    description: &'static str,
    difficulty_tier: u8,
    duration_minutes: u32,
    prerequisites: &'static [&'static str],
    skills: [&'static str; 3],
    methodology: &'static str,
}

const BUILTIN_MODULES: [ModuleEntry; 11] = [
    ModuleEntry {
        id: "chords-basic-open",
        category: ModuleCategory::Chords,
        name: "Basic Open Chords",
        description: "Master the seven essential open chords (C, D, E, G, A, Am, Em)",
        difficulty_tier: 1,
        duration_minutes: 15,
        prerequisites: &[],
        skills: ["finger placement", "chord changes", "muscle memory"],
        methodology: "Repetitive practice with visual feedback, accuracy before speed",
    },
    ModuleEntry {
        id: "chords-transitions",
        category: ModuleCategory::Chords,
        name: "Smooth Transitions",
        description: "Train fast changes between common chords",
        difficulty_tier: 2,
        duration_minutes: 20,
        prerequisites: &["chords-basic-open"],
        skills: ["speed", "fluency", "motor coordination"],
        methodology: "Progressive metronome method, raising the BPM gradually",
    },
    ModuleEntry {
        id: "chords-barre",
        category: ModuleCategory::Chords,
        name: "Barre Chords",
        description: "Build the strength and technique for barre chords",
        difficulty_tier: 3,
        duration_minutes: 25,
        prerequisites: &["chords-basic-open", "chords-transitions"],
        skills: ["finger strength", "endurance", "advanced technique"],
        methodology: "Incremental difficulty with strengthening exercises",
    },
    ModuleEntry {
        id: "scales-major-pentatonic",
        category: ModuleCategory::Scales,
        name: "Major Pentatonic Scale",
        description: "The most versatile scale for improvisation",
        difficulty_tier: 2,
        duration_minutes: 15,
        prerequisites: &["chords-basic-open"],
        skills: ["improvisation", "music theory", "coordination"],
        methodology: "Learning through visual patterns applied to real songs",
    },
    ModuleEntry {
        id: "scales-minor-pentatonic",
        category: ModuleCategory::Scales,
        name: "Minor Pentatonic Scale",
        description: "The foundation of blues and rock",
        difficulty_tier: 2,
        duration_minutes: 15,
        prerequisites: &["scales-major-pentatonic"],
        skills: ["musical expression", "blues", "improvisation"],
        methodology: "Practice in musical context over backing tracks",
    },
    ModuleEntry {
        id: "rhythm-basic-strumming",
        category: ModuleCategory::Rhythm,
        name: "Basic Strumming",
        description: "Fundamental rhythmic patterns",
        difficulty_tier: 1,
        duration_minutes: 10,
        prerequisites: &[],
        skills: ["rhythmic sense", "strumming-hand coordination", "timing"],
        methodology: "Metronome practice with conscious subdivision",
    },
    ModuleEntry {
        id: "rhythm-fingerpicking",
        category: ModuleCategory::Rhythm,
        name: "Basic Fingerpicking",
        description: "Fingerpicking patterns for beginners",
        difficulty_tier: 2,
        duration_minutes: 20,
        prerequisites: &["rhythm-basic-strumming"],
        skills: ["finger independence", "precision", "dynamic control"],
        methodology: "Finger independence drills, progressing from slow to fast",
    },
    ModuleEntry {
        id: "ear-intervals",
        category: ModuleCategory::EarTraining,
        name: "Interval Recognition",
        description: "Identify musical intervals by sound",
        difficulty_tier: 2,
        duration_minutes: 15,
        prerequisites: &[],
        skills: ["aural perception", "music theory", "relative pitch"],
        methodology: "Spaced repetition with reference melodies",
    },
    ModuleEntry {
        id: "ear-chords",
        category: ModuleCategory::EarTraining,
        name: "Chord Recognition",
        description: "Identify major, minor, and dominant chords",
        difficulty_tier: 3,
        duration_minutes: 20,
        prerequisites: &["ear-intervals"],
        skills: ["harmony", "musical analysis", "transcription"],
        methodology: "Contextual practice analysing real songs",
    },
    ModuleEntry {
        id: "songs-beginner",
        category: ModuleCategory::Songs,
        name: "First Complete Song",
        description: "Learn a song from start to finish",
        difficulty_tier: 1,
        duration_minutes: 30,
        prerequisites: &["chords-basic-open", "rhythm-basic-strumming"],
        skills: ["practical application", "memorisation", "performance"],
        methodology: "Chunked learning, splitting the song into small sections",
    },
    ModuleEntry {
        id: "technique-posture",
        category: ModuleCategory::Technique,
        name: "Posture and Ergonomics",
        description: "Fundamentals for playing without injury",
        difficulty_tier: 1,
        duration_minutes: 10,
        prerequisites: &[],
        skills: ["health", "injury prevention", "efficiency"],
        methodology: "Body awareness and stretching exercises",
    },
];

impl ModuleEntry {
    fn to_module(&self) -> TrainingModule {
        TrainingModule {
            id: self.id.to_owned(),
            category: self.category,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            difficulty_tier: self.difficulty_tier,
            duration_minutes: self.duration_minutes,
            prerequisite_ids: self.prerequisites.iter().map(|id| (*id).to_owned()).collect(),
            skills: self.skills.iter().map(|skill| (*skill).to_owned()).collect(),
            methodology: self.methodology.to_owned(),
        }
    }
}

/// Read-only, validated list of training modules
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<TrainingModule>,
}

impl ModuleCatalog {
    /// The built-in guitar curriculum
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            modules: BUILTIN_MODULES.iter().map(ModuleEntry::to_module).collect(),
        }
    }

    /// Build a catalog from custom modules
    ///
    /// # Errors
    ///
    /// Returns an error if ids repeat, a prerequisite is unknown, a tier is out
    /// of range, or the prerequisite graph has a cycle
    pub fn new(modules: Vec<TrainingModule>) -> Result<Self, CatalogError> {
        let catalog = Self { modules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// All modules in catalog order
    #[must_use]
    pub fn modules(&self) -> &[TrainingModule] {
        &self.modules
    }

    /// Look up a module by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TrainingModule> {
        self.modules.iter().find(|module| module.id == id)
    }

    /// Modules in `category`, in catalog order
    pub fn by_category(
        &self,
        category: ModuleCategory,
    ) -> impl Iterator<Item = &TrainingModule> + '_ {
        self.modules
            .iter()
            .filter(move |module| module.category == category)
    }

    /// Modules with exactly the given difficulty tier
    pub fn by_difficulty(&self, tier: u8) -> impl Iterator<Item = &TrainingModule> + '_ {
        self.modules
            .iter()
            .filter(move |module| module.difficulty_tier == tier)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut index: HashMap<&str, &TrainingModule> = HashMap::with_capacity(self.modules.len());
        for module in &self.modules {
            if index.insert(module.id.as_str(), module).is_some() {
                return Err(CatalogError::DuplicateModule(module.id.clone()));
            }
            if !(MIN_MODULE_TIER..=MAX_MODULE_TIER).contains(&module.difficulty_tier) {
                return Err(CatalogError::InvalidDifficulty {
                    module: module.id.clone(),
                    tier: module.difficulty_tier,
                });
            }
        }

        for module in &self.modules {
            if let Some(missing) = module
                .prerequisite_ids
                .iter()
                .find(|id| !index.contains_key(id.as_str()))
            {
                return Err(CatalogError::UnknownPrerequisite {
                    module: module.id.clone(),
                    prerequisite: missing.clone(),
                });
            }
        }

        let mut finished: HashSet<&str> = HashSet::new();
        for module in &self.modules {
            let mut visiting: HashSet<&str> = HashSet::new();
            visit(module.id.as_str(), &index, &mut visiting, &mut finished)?;
        }
        Ok(())
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Depth-first walk over prerequisites, failing on a back edge
fn visit<'a>(
    id: &'a str,
    index: &HashMap<&'a str, &'a TrainingModule>,
    visiting: &mut HashSet<&'a str>,
    finished: &mut HashSet<&'a str>,
) -> Result<(), CatalogError> {
    if finished.contains(id) {
        return Ok(());
    }
    if !visiting.insert(id) {
        return Err(CatalogError::PrerequisiteCycle(id.to_owned()));
    }
    if let Some(&module) = index.get(id) {
        for prerequisite in &module.prerequisite_ids {
            visit(prerequisite.as_str(), index, visiting, finished)?;
        }
    }
    visiting.remove(id);
    finished.insert(id);
    Ok(())
}

/// Skill category to module id lookup used to target weak areas
///
/// Ids are listed in preference order; the plan builder takes the first
/// eligible module in catalog order that appears in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAffinity {
    table: BTreeMap<SkillCategory, Vec<String>>,
}

impl CategoryAffinity {
    /// Empty table
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Built-in table matching the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_entry(
                SkillCategory::Chord,
                ["chords-transitions", "chords-basic-open"],
            )
            .with_entry(
                SkillCategory::Scale,
                ["scales-major-pentatonic", "scales-minor-pentatonic"],
            )
            .with_entry(SkillCategory::Song, ["songs-beginner"])
            .with_entry(SkillCategory::EarTraining, ["ear-intervals", "ear-chords"])
    }

    /// Replace the module ids mapped to `category`
    #[must_use]
    pub fn with_entry<I, S>(mut self, category: SkillCategory, module_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .insert(category, module_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Module ids addressing `category` (empty when unmapped)
    #[must_use]
    pub fn module_ids(&self, category: SkillCategory) -> &[String] {
        self.table.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `module_id` addresses `category`
    #[must_use]
    pub fn addresses(&self, category: SkillCategory, module_id: &str) -> bool {
        self.module_ids(category).iter().any(|id| id == module_id)
    }
}

impl Default for CategoryAffinity {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, prerequisites: &[&str]) -> TrainingModule {
        TrainingModule {
            id: id.to_owned(),
            category: ModuleCategory::Chords,
            name: id.to_owned(),
            description: String::new(),
            difficulty_tier: 1,
            duration_minutes: 10,
            prerequisite_ids: prerequisites.iter().map(|p| (*p).to_owned()).collect(),
            skills: vec!["skill".to_owned()],
            methodology: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ModuleCatalog::builtin();
        assert_eq!(catalog.modules().len(), 11);
        assert!(ModuleCatalog::new(catalog.modules().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_affinity_points_at_catalog_modules() {
        let catalog = ModuleCatalog::builtin();
        let affinity = CategoryAffinity::builtin();
        for category in SkillCategory::ALL {
            assert!(!affinity.module_ids(category).is_empty());
            for id in affinity.module_ids(category) {
                assert!(catalog.get(id).is_some(), "{id} missing from catalog");
            }
        }
    }

    #[test]
    fn test_cycle_rejected() {
        let result = ModuleCatalog::new(vec![module("a", &["b"]), module("b", &["a"])]);
        assert!(matches!(result, Err(CatalogError::PrerequisiteCycle(_))));
    }

    #[test]
    fn test_unknown_prerequisite_rejected() {
        let result = ModuleCatalog::new(vec![module("a", &["missing"])]);
        assert_eq!(
            result.err(),
            Some(CatalogError::UnknownPrerequisite {
                module: "a".to_owned(),
                prerequisite: "missing".to_owned(),
            })
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ModuleCatalog::new(vec![module("a", &[]), module("a", &[])]);
        assert!(matches!(result, Err(CatalogError::DuplicateModule(_))));
    }
}
