//! nordum-core
//!
//! Selection, transformation, inflection and assembly engine for the Nordum
//! pan-Scandinavian lexicon: merges Norwegian, Danish and Swedish dictionary
//! rows into one normalized target lexicon with full paradigms and
//! alternative spellings.
//!
//! Public API:
//! - `ConceptTable` / `ConceptEntry` / `Candidate` - ordered input model
//! - `select` / `Selection` - canonical-source choice for one concept
//! - `transform` - canonical target spelling derivation
//! - `inflect` / `Paradigm` - per-POS paradigm generation
//! - `alternatives` - secondary valid spellings
//! - `assemble` / `BuildStats` - the single build pass
//! - `Lexicon` / `LexicalEntry` - output store with export ordering
//! - `export` - JSON, wordlist, statistics and fst artifacts
//! - `BuildOptions` - scoring weights and build tunables

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod candidate;
pub use candidate::{Candidate, ConceptEntry, ConceptTable, Gender, Language, PartOfSpeech};

pub mod normalize;
pub use normalize::normalize;

pub mod similarity;
pub use similarity::cognate_score;

pub mod rules;
pub use rules::{Rule, RuleTable, Scope, ORTHOGRAPHIC_RULES};

pub mod wordlists;

pub mod select;
pub use select::{select, Origin, Selection};

pub mod transform;
pub use transform::transform;

pub mod inflect;
pub use inflect::{inflect, AdjectiveParadigm, NounParadigm, Paradigm, VerbParadigm};

pub mod alternatives;
pub use alternatives::{alternatives, AlternativeSpelling};

pub mod lexicon;
pub use lexicon::{LexicalEntry, Lexicon};

pub mod assemble;
pub use assemble::{assemble, BuildStats};

pub mod export;

/// Build tunables.
///
/// The defaults are the documented scoring scheme. Changing a weight changes
/// scoring only; the priority order of the selection cascade and the rule
/// table stay fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    // ========== Selector scoring ==========
    /// Selector weight for Norwegian candidates
    pub language_weight_norwegian: f64,
    /// Selector weight for Danish candidates
    pub language_weight_danish: f64,
    /// Selector weight for Swedish candidates
    pub language_weight_swedish: f64,
    /// Multiplier on log10(frequency + 1) in the selector score
    pub frequency_log_factor: f64,

    // ========== Category votes ==========
    /// Norwegian vote weight for part-of-speech and gender majorities
    pub pos_vote_weight_norwegian: f64,
    /// Danish vote weight
    pub pos_vote_weight_danish: f64,
    /// Swedish vote weight
    pub pos_vote_weight_swedish: f64,

    // ========== Frequency aggregation ==========
    /// Norwegian weight in the mean output frequency
    pub frequency_weight_norwegian: f64,
    /// Danish weight in the mean output frequency
    pub frequency_weight_danish: f64,
    /// Swedish weight in the mean output frequency
    pub frequency_weight_swedish: f64,
    /// Output frequency when no candidate reports one
    pub default_frequency: f64,

    // ========== Output shaping ==========
    /// Lower bound applied to the cognate score on output
    pub cognate_score_floor: f64,
    /// An alternative entry's frequency is round(parent * this)
    pub alternative_frequency_factor: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            // Norwegian and Danish carry the lexicon; Swedish breaks away
            // only on strong frequency evidence
            language_weight_norwegian: 3.0,
            language_weight_danish: 3.0,
            language_weight_swedish: 1.0,
            frequency_log_factor: 0.5,
            // double weight for Norwegian and Danish in category votes
            pos_vote_weight_norwegian: 2.0,
            pos_vote_weight_danish: 2.0,
            pos_vote_weight_swedish: 1.0,
            // frequency averaging leans the same way, less sharply
            frequency_weight_norwegian: 1.5,
            frequency_weight_danish: 1.5,
            frequency_weight_swedish: 1.0,
            default_frequency: 1000.0,
            cognate_score_floor: 0.5,
            alternative_frequency_factor: 0.7,
        }
    }
}

impl BuildOptions {
    /// Load options from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let options: BuildOptions = toml::from_str(&content)?;
        Ok(options)
    }

    /// Save options to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize options to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    // ========== Per-language accessors ==========

    /// Selector weight for a source language.
    pub fn language_weight(&self, language: Language) -> f64 {
        match language {
            Language::Norwegian => self.language_weight_norwegian,
            Language::Danish => self.language_weight_danish,
            Language::Swedish => self.language_weight_swedish,
        }
    }

    /// Vote weight for part-of-speech and gender majorities.
    pub fn pos_vote_weight(&self, language: Language) -> f64 {
        match language {
            Language::Norwegian => self.pos_vote_weight_norwegian,
            Language::Danish => self.pos_vote_weight_danish,
            Language::Swedish => self.pos_vote_weight_swedish,
        }
    }

    /// Weight in the mean-frequency computation.
    pub fn frequency_weight(&self, language: Language) -> f64 {
        match language {
            Language::Norwegian => self.frequency_weight_norwegian,
            Language::Danish => self.frequency_weight_danish,
            Language::Swedish => self.frequency_weight_swedish,
        }
    }
}
