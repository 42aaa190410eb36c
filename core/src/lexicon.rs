//! The assembled lexicon.
//!
//! Holds one `LexicalEntry` per canonical or alternative spelling, in
//! insertion order. Keys are unique; a second insert of a taken key is
//! refused rather than merged, since which entry owns a key is exactly what
//! the first-writer-wins policy decides.
//!
//! Public API:
//! - `LexicalEntry`: the full output record for one spelling
//! - `Lexicon`: ordered entry store with key index, export ordering, and
//!   bincode persistence

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::candidate::{Candidate, Gender, Language, PartOfSpeech};
use crate::inflect::Paradigm;

/// One output record: a canonical spelling or a derived alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalEntry {
    /// The unique output key.
    pub canonical_form: String,
    /// English gloss this entry answers to.
    pub concept: String,
    pub pos: PartOfSpeech,
    pub gender: Option<Gender>,
    /// Mean pairwise candidate similarity, floored on output.
    pub cognate_score: f64,
    /// How many source languages contributed a usable candidate.
    pub source_language_count: usize,
    /// Weighted mean corpus frequency.
    pub frequency: f64,
    /// Per-language provenance.
    pub sources: BTreeMap<Language, Candidate>,
    pub inflections: Paradigm,
    pub selection_rationale: String,
    /// Key of the parent entry when this is a secondary spelling.
    pub is_alternative_of: Option<String>,
    pub alternative_rationale: Option<String>,
}

impl LexicalEntry {
    /// True for primary entries, false for derived spellings.
    pub fn is_canonical(&self) -> bool {
        self.is_alternative_of.is_none()
    }

    /// Export rank; entries sort descending on this within their group.
    pub fn export_weight(&self) -> f64 {
        self.cognate_score * self.source_language_count as f64
    }

    /// The entry's own spelling plus every inflected surface form,
    /// deduplicated but otherwise in paradigm order.
    pub fn surface_forms(&self) -> Vec<&str> {
        let mut forms = vec![self.canonical_form.as_str()];
        for form in self.inflections.surface_forms() {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        forms
    }
}

/// Insertion-ordered entry store with unique keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<LexicalEntry>,
    /// Key to position in `entries`; rebuilt on load, never serialized.
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless its key is taken.
    ///
    /// Returns true if the entry went in; false leaves the existing entry
    /// untouched (first writer wins).
    pub fn insert(&mut self, entry: LexicalEntry) -> bool {
        if self.index.contains_key(&entry.canonical_form) {
            return false;
        }
        self.index.insert(entry.canonical_form.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&LexicalEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LexicalEntry> {
        self.entries.iter()
    }

    /// Entries in export order: canonical before alternatives, then
    /// descending `cognateScore * sourceLanguageCount`, stable within ties.
    pub fn export_order(&self) -> Vec<&LexicalEntry> {
        let mut ordered: Vec<&LexicalEntry> = self.entries.iter().collect();
        ordered.sort_by(|a, b| {
            b.is_canonical().cmp(&a.is_canonical()).then_with(|| {
                b.export_weight()
                    .partial_cmp(&a.export_weight())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });
        ordered
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of primary entries.
    pub fn canonical_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_canonical()).count()
    }

    /// Count of derived-spelling entries.
    pub fn alternative_count(&self) -> usize {
        self.len() - self.canonical_count()
    }

    /// Save the lexicon to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load a lexicon from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)?;
        lexicon.rebuild_index();
        Ok(lexicon)
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.canonical_form.clone(), i))
            .collect();
    }
}
