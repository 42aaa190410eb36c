//! Canonical-source selection for one concept.
//!
//! Selection is a priority cascade, evaluated top to bottom with the first
//! producing strategy winning:
//! 1. curated English loanwords
//! 2. curated Norwegian numerals
//! 3. weighted scoring over the remaining candidates
//!
//! The cascade order is fixed; build options tune the weights inside the
//! scored strategy, never the order itself.

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, ConceptEntry, Language};
use crate::wordlists;
use crate::BuildOptions;

/// Where a selected canonical word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The concept itself is kept as an English loanword.
    Loanword,
    /// A curated Norwegian numeral replaces the candidates.
    Numeral,
    /// A scored pick from one source language.
    Source(Language),
}

impl Origin {
    /// Human-readable origin used in rationale strings.
    pub fn describe(&self) -> String {
        match self {
            Origin::Loanword => "English loanword".to_string(),
            Origin::Numeral => "Norwegian numeral".to_string(),
            Origin::Source(language) => language.display_name().to_string(),
        }
    }
}

/// The outcome of selection: the word to canonicalize and why it won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub word: String,
    pub origin: Origin,
    pub rationale: String,
}

/// One selection strategy; returns Some on a hit.
pub type SelectionStrategy = fn(&ConceptEntry, &BuildOptions) -> Option<Selection>;

/// The priority cascade, first hit wins.
pub const SELECTION_STRATEGIES: [SelectionStrategy; 3] =
    [select_loanword, select_numeral, select_scored];

/// Pick the canonical source word for a concept.
///
/// Returns None when no candidate carries a word; such concepts are skipped
/// by the assembler.
pub fn select(entry: &ConceptEntry, options: &BuildOptions) -> Option<Selection> {
    if entry.usable_candidates().next().is_none() {
        return None;
    }
    SELECTION_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(entry, options))
}

/// Strategy 1: curated English loanwords pass through as themselves.
fn select_loanword(entry: &ConceptEntry, _options: &BuildOptions) -> Option<Selection> {
    if !wordlists::is_loanword(&entry.concept) {
        return None;
    }
    let word = entry.concept.trim().to_lowercase();
    Some(Selection {
        rationale: format!("English loanword '{word}' kept unchanged"),
        word,
        origin: Origin::Loanword,
    })
}

/// Strategy 2: number glosses take the curated Norwegian numeral.
fn select_numeral(entry: &ConceptEntry, _options: &BuildOptions) -> Option<Selection> {
    let numeral = wordlists::numeral_for(&entry.concept)?;
    Some(Selection {
        word: numeral.to_string(),
        origin: Origin::Numeral,
        rationale: format!("Norwegian numeral '{}' for '{}'", numeral, entry.concept.trim()),
    })
}

/// Strategy 3: weighted scoring over every candidate that carries a word.
///
/// Ties keep the first candidate in language order, so equal Norwegian and
/// Danish scores fall to Norwegian.
fn select_scored(entry: &ConceptEntry, options: &BuildOptions) -> Option<Selection> {
    let mut best: Option<(Language, &Candidate, f64)> = None;
    for (language, candidate) in entry.usable_candidates() {
        let score = score_candidate(language, candidate, options);
        let better = match &best {
            Some((_, _, best_score)) => score > *best_score,
            None => true,
        };
        if better {
            best = Some((language, candidate, score));
        }
    }
    let (language, candidate, score) = best?;
    Some(Selection {
        word: candidate.word.trim().to_lowercase(),
        origin: Origin::Source(language),
        rationale: format!(
            "selected {} '{}' (score {:.2})",
            language.display_name(),
            candidate.word.trim(),
            score
        ),
    })
}

/// Additive score for one candidate.
///
/// The language weight dominates, corpus frequency contributes
/// logarithmically, and a small regularity term prefers spellings already
/// close to the target orthography.
pub fn score_candidate(language: Language, candidate: &Candidate, options: &BuildOptions) -> f64 {
    options.language_weight(language)
        + (candidate.frequency + 1.0).log10() * options.frequency_log_factor
        + regularity_score(&candidate.word)
}

/// How regular a spelling already is with respect to the target rules.
///
/// Starts at 1.0, floored at 0.0:
/// - contains `ck`: -0.1
/// - contains `ph`: -0.1
/// - ends with `dt`: -0.2
/// - entirely within the alphabet `[a-zäöå]`: +0.1
/// - at most 8 characters: +0.05
pub fn regularity_score(word: &str) -> f64 {
    let mut score: f64 = 1.0;
    if word.contains("ck") {
        score -= 0.1;
    }
    if word.contains("ph") {
        score -= 0.1;
    }
    if word.ends_with("dt") {
        score -= 0.2;
    }
    if !word.is_empty() && word.chars().all(|c| matches!(c, 'a'..='z' | 'ä' | 'ö' | 'å')) {
        score += 0.1;
    }
    if word.chars().count() <= 8 {
        score += 0.05;
    }
    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regularity_rewards_plain_short_spellings() {
        assert!((regularity_score("hus") - 1.15).abs() < 1e-9);
        assert!((regularity_score("pakke") - 1.15).abs() < 1e-9);
    }

    #[test]
    fn regularity_penalizes_foreign_clusters() {
        // ck and the length bonus partially cancel
        assert!((regularity_score("packe") - 1.05).abs() < 1e-9);
        assert!((regularity_score("philosophendt") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn empty_word_gets_no_alphabet_bonus() {
        assert!((regularity_score("") - 1.05).abs() < 1e-9);
    }

    #[test]
    fn penalties_stack_additively() {
        // ph, ck and a dt ending together, with ø blocking the alphabet bonus
        assert!((regularity_score("phøckendt") - 0.6).abs() < 1e-9);
    }
}
