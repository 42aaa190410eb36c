//! Input-side data model for the lexicon build.
//!
//! This module provides:
//! - `Language`: the three source languages in their fixed merge order
//! - `PartOfSpeech` / `Gender`: grammatical categories carried by source rows
//! - `Candidate`: one language's word for a concept
//! - `ConceptEntry` / `ConceptTable`: the ordered input the assembler walks

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A source language contributing candidates.
///
/// The derived `Ord` is the merge order (Norwegian, then Danish, then
/// Swedish). Iterating a `BTreeMap<Language, _>` therefore visits candidates
/// in exactly that order, which tie-breaking and vote logic rely on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Norwegian,
    Danish,
    Swedish,
}

impl Language {
    /// All languages in merge order.
    pub const ALL: [Language; 3] = [Language::Norwegian, Language::Danish, Language::Swedish];

    /// Human-readable name used in rationale strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Norwegian => "Norwegian Bokmål",
            Language::Danish => "Danish",
            Language::Swedish => "Swedish",
        }
    }

    /// Parse a language tag as found in source data.
    pub fn parse(s: &str) -> Option<Language> {
        match s.trim().to_lowercase().as_str() {
            "norwegian" | "no" | "nb" => Some(Language::Norwegian),
            "danish" | "da" => Some(Language::Danish),
            "swedish" | "sv" => Some(Language::Swedish),
            _ => None,
        }
    }
}

/// Part of speech carried by a source row.
///
/// Only nouns, verbs and adjectives have paradigm tables; the rest still
/// form entries, with an empty paradigm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Article,
}

impl PartOfSpeech {
    /// Parse a lowercase POS tag as found in source data.
    pub fn parse(s: &str) -> Option<PartOfSpeech> {
        match s.trim().to_lowercase().as_str() {
            "noun" => Some(PartOfSpeech::Noun),
            "verb" => Some(PartOfSpeech::Verb),
            "adjective" => Some(PartOfSpeech::Adjective),
            "adverb" => Some(PartOfSpeech::Adverb),
            "pronoun" => Some(PartOfSpeech::Pronoun),
            "preposition" => Some(PartOfSpeech::Preposition),
            "conjunction" => Some(PartOfSpeech::Conjunction),
            "interjection" => Some(PartOfSpeech::Interjection),
            "numeral" => Some(PartOfSpeech::Numeral),
            "article" => Some(PartOfSpeech::Article),
            _ => None,
        }
    }

    /// The lowercase tag, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Article => "article",
        }
    }
}

/// Grammatical gender, carried by noun rows only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Common,
    Neuter,
}

impl Gender {
    /// Parse a gender tag; empty or unknown tags yield None.
    pub fn parse(s: &str) -> Option<Gender> {
        match s.trim().to_lowercase().as_str() {
            "common" | "c" => Some(Gender::Common),
            "neuter" | "n" => Some(Gender::Neuter),
            _ => None,
        }
    }
}

/// One source language's word for a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub pos: PartOfSpeech,
    pub gender: Option<Gender>,
    /// Corpus occurrence count; 0 when unknown.
    pub frequency: f64,
}

impl Candidate {
    pub fn new<T: Into<String>>(word: T, pos: PartOfSpeech) -> Self {
        Self {
            word: word.into(),
            pos,
            gender: None,
            frequency: 0.0,
        }
    }

    pub fn with_frequency<T: Into<String>>(word: T, pos: PartOfSpeech, frequency: f64) -> Self {
        Self {
            word: word.into(),
            pos,
            gender: None,
            frequency,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// A candidate whose word field is blank is treated as absent.
    pub fn has_word(&self) -> bool {
        !self.word.trim().is_empty()
    }
}

/// One concept (English gloss) with its per-language candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub concept: String,
    pub candidates: BTreeMap<Language, Candidate>,
}

impl ConceptEntry {
    pub fn new<T: Into<String>>(concept: T) -> Self {
        Self {
            concept: concept.into(),
            candidates: BTreeMap::new(),
        }
    }

    /// Builder-style candidate attachment, mostly for tests and fixtures.
    pub fn with_candidate(mut self, language: Language, candidate: Candidate) -> Self {
        self.candidates.insert(language, candidate);
        self
    }

    /// Candidates that actually carry a word, in merge order.
    pub fn usable_candidates(&self) -> impl Iterator<Item = (Language, &Candidate)> + '_ {
        self.candidates
            .iter()
            .filter(|(_, c)| c.has_word())
            .map(|(l, c)| (*l, c))
    }

    /// The usable candidate words, in merge order.
    pub fn words(&self) -> Vec<&str> {
        self.usable_candidates().map(|(_, c)| c.word.as_str()).collect()
    }
}

/// The ordered input table the assembler walks.
///
/// Insertion order is the processing order. First-writer-wins collision
/// handling makes that order part of the output contract, so entries live in
/// a Vec; the index only serves lookups while the table is being filled.
#[derive(Debug, Clone, Default)]
pub struct ConceptTable {
    entries: Vec<ConceptEntry>,
    index: AHashMap<String, usize>,
}

impl ConceptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, merging into an existing concept if one is present.
    ///
    /// When merging, a language slot that is already filled keeps its first
    /// candidate.
    pub fn push(&mut self, entry: ConceptEntry) {
        match self.index.get(&entry.concept) {
            Some(&i) => {
                for (language, candidate) in entry.candidates {
                    self.entries[i].candidates.entry(language).or_insert(candidate);
                }
            }
            None => {
                self.index.insert(entry.concept.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Record one language's candidate for a concept, creating the concept
    /// at the back of the table on first sight.
    pub fn add_candidate(&mut self, concept: &str, language: Language, candidate: Candidate) {
        match self.index.get(concept) {
            Some(&i) => {
                self.entries[i].candidates.entry(language).or_insert(candidate);
            }
            None => {
                self.index.insert(concept.to_string(), self.entries.len());
                let mut entry = ConceptEntry::new(concept);
                entry.candidates.insert(language, candidate);
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, concept: &str) -> Option<&ConceptEntry> {
        self.index.get(concept).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConceptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
