//! The single build pass over the concept table.
//!
//! Assembly is strictly sequential: later concepts must observe which keys
//! earlier concepts claimed, so the pass cannot be reordered or run in
//! parallel without changing the output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::alternatives::{alternatives, AlternativeSpelling};
use crate::candidate::{Candidate, ConceptEntry, ConceptTable, Gender, Language, PartOfSpeech};
use crate::inflect::inflect;
use crate::lexicon::{LexicalEntry, Lexicon};
use crate::select::{select, Selection};
use crate::similarity::cognate_score;
use crate::transform::transform;
use crate::BuildOptions;

/// Counters for one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    pub concepts_seen: usize,
    /// Concepts dropped for lacking any usable candidate.
    pub concepts_skipped: usize,
    pub canonical_entries: usize,
    /// Canonical inserts refused because the key was taken.
    pub canonical_collisions: usize,
    pub alternatives_emitted: usize,
    /// Alternative inserts refused because the key was taken.
    pub alternatives_skipped: usize,
}

/// Build the lexicon from an ordered concept table.
///
/// One linear pass inserts every canonical entry; a second pass over the
/// canonical set inserts the surviving alternative spellings. The first
/// entry to claim a key keeps it, in both passes.
pub fn assemble(concepts: &ConceptTable, options: &BuildOptions) -> (Lexicon, BuildStats) {
    let mut lexicon = Lexicon::new();
    let mut stats = BuildStats::default();

    for entry in concepts.iter() {
        stats.concepts_seen += 1;
        let Some(selection) = select(entry, options) else {
            warn!(concept = %entry.concept, "no usable candidate, concept skipped");
            stats.concepts_skipped += 1;
            continue;
        };

        let pos = vote_pos(entry, options);
        let gender = vote_gender(entry, options, pos);
        let canonical = transform(&selection.word, &entry.concept, pos);

        let words = entry.words();
        let score = cognate_score(&words).max(options.cognate_score_floor);
        let sources: BTreeMap<Language, Candidate> = entry
            .usable_candidates()
            .map(|(language, candidate)| (language, candidate.clone()))
            .collect();

        let record = LexicalEntry {
            canonical_form: canonical.clone(),
            concept: entry.concept.clone(),
            pos,
            gender,
            cognate_score: score,
            source_language_count: sources.len(),
            frequency: weighted_frequency(entry, options),
            sources,
            inflections: inflect(&canonical, pos, gender),
            selection_rationale: build_rationale(&selection, entry, pos),
            is_alternative_of: None,
            alternative_rationale: None,
        };

        if lexicon.insert(record) {
            stats.canonical_entries += 1;
            debug!(concept = %entry.concept, form = %canonical, "canonical entry inserted");
        } else {
            stats.canonical_collisions += 1;
            debug!(
                concept = %entry.concept,
                form = %canonical,
                "canonical key already claimed, keeping the first entry"
            );
        }
    }

    // Alternatives only run once every canonical entry has claimed its key.
    let parents: Vec<LexicalEntry> = lexicon.iter().cloned().collect();
    for parent in &parents {
        for alt in alternatives(&parent.canonical_form, &parent.concept) {
            let record = alternative_entry(parent, &alt, options);
            if lexicon.insert(record) {
                stats.alternatives_emitted += 1;
            } else {
                stats.alternatives_skipped += 1;
                debug!(
                    parent = %parent.canonical_form,
                    spelling = %alt.spelling,
                    "alternative collides with an existing key, skipped"
                );
            }
        }
    }

    info!(
        entries = lexicon.len(),
        canonical = stats.canonical_entries,
        alternatives = stats.alternatives_emitted,
        skipped = stats.concepts_skipped,
        "lexicon assembled"
    );
    (lexicon, stats)
}

/// Weighted majority vote for the entry's part of speech.
///
/// Norwegian and Danish count double; a tie keeps the part of speech first
/// encountered in language order.
fn vote_pos(entry: &ConceptEntry, options: &BuildOptions) -> PartOfSpeech {
    let mut totals: Vec<(PartOfSpeech, f64)> = Vec::new();
    for (language, candidate) in entry.usable_candidates() {
        let weight = options.pos_vote_weight(language);
        match totals.iter_mut().find(|(pos, _)| *pos == candidate.pos) {
            Some((_, total)) => *total += weight,
            None => totals.push((candidate.pos, weight)),
        }
    }
    let mut best: Option<(PartOfSpeech, f64)> = None;
    for (pos, total) in totals {
        let better = match best {
            Some((_, best_total)) => total > best_total,
            None => true,
        };
        if better {
            best = Some((pos, total));
        }
    }
    best.map(|(pos, _)| pos).unwrap_or(PartOfSpeech::Noun)
}

/// Weighted majority vote for gender; nouns only, and only candidates that
/// carry a gender vote.
fn vote_gender(entry: &ConceptEntry, options: &BuildOptions, pos: PartOfSpeech) -> Option<Gender> {
    if pos != PartOfSpeech::Noun {
        return None;
    }
    let mut totals: Vec<(Gender, f64)> = Vec::new();
    for (language, candidate) in entry.usable_candidates() {
        let Some(gender) = candidate.gender else { continue };
        let weight = options.pos_vote_weight(language);
        match totals.iter_mut().find(|(g, _)| *g == gender) {
            Some((_, total)) => *total += weight,
            None => totals.push((gender, weight)),
        }
    }
    let mut best: Option<(Gender, f64)> = None;
    for (gender, total) in totals {
        let better = match best {
            Some((_, best_total)) => total > best_total,
            None => true,
        };
        if better {
            best = Some((gender, total));
        }
    }
    best.map(|(gender, _)| gender)
}

/// Weighted mean frequency over candidates that report one; the default
/// applies when none does.
fn weighted_frequency(entry: &ConceptEntry, options: &BuildOptions) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for (language, candidate) in entry.usable_candidates() {
        if candidate.frequency > 0.0 {
            let weight = options.frequency_weight(language);
            total += candidate.frequency * weight;
            weight_sum += weight;
        }
    }
    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        options.default_frequency
    }
}

/// The recorded reason a canonical form was chosen. When the Norwegian and
/// Danish candidates converge on the same target spelling, that agreement
/// becomes part of the story.
fn build_rationale(selection: &Selection, entry: &ConceptEntry, pos: PartOfSpeech) -> String {
    let mut rationale = selection.rationale.clone();
    if let (Some(no), Some(da)) = (
        entry.candidates.get(&Language::Norwegian),
        entry.candidates.get(&Language::Danish),
    ) {
        if no.has_word() && da.has_word() {
            let no_form = transform(&no.word, &entry.concept, pos);
            let da_form = transform(&da.word, &entry.concept, pos);
            if no_form == da_form {
                rationale.push_str("; Norwegian Bokmål and Danish forms agree after normalization");
            }
        }
    }
    rationale
}

/// The entry record for one alternative spelling of `parent`.
fn alternative_entry(
    parent: &LexicalEntry,
    alt: &AlternativeSpelling,
    options: &BuildOptions,
) -> LexicalEntry {
    LexicalEntry {
        canonical_form: alt.spelling.clone(),
        concept: parent.concept.clone(),
        pos: parent.pos,
        gender: parent.gender,
        cognate_score: parent.cognate_score,
        source_language_count: parent.source_language_count,
        frequency: (parent.frequency * options.alternative_frequency_factor).round(),
        sources: parent.sources.clone(),
        inflections: inflect(&alt.spelling, parent.pos, parent.gender),
        selection_rationale: parent.selection_rationale.clone(),
        is_alternative_of: Some(parent.canonical_form.clone()),
        alternative_rationale: Some(alt.rationale.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;

    fn verb(word: &str, freq: f64) -> Candidate {
        Candidate::with_frequency(word, PartOfSpeech::Verb, freq)
    }

    #[test]
    fn weighted_frequency_skips_unreported_candidates() {
        let options = BuildOptions::default();
        let entry = ConceptEntry::new("work")
            .with_candidate(Language::Norwegian, verb("arbeider", 1500.0))
            .with_candidate(Language::Danish, verb("arbejder", 0.0))
            .with_candidate(Language::Swedish, verb("arbetar", 1600.0));
        let freq = weighted_frequency(&entry, &options);
        assert!((freq - (1500.0 * 1.5 + 1600.0) / 2.5).abs() < 1e-9);
    }

    #[test]
    fn frequency_defaults_when_nothing_reported() {
        let options = BuildOptions::default();
        let entry = ConceptEntry::new("work")
            .with_candidate(Language::Norwegian, verb("arbeider", 0.0));
        assert_eq!(weighted_frequency(&entry, &options), 1000.0);
    }

    #[test]
    fn pos_vote_doubles_norwegian_and_danish() {
        let options = BuildOptions::default();
        // swedish disagrees alone and loses 4 to 1
        let entry = ConceptEntry::new("light")
            .with_candidate(
                Language::Norwegian,
                Candidate::new("lys", PartOfSpeech::Noun),
            )
            .with_candidate(Language::Danish, Candidate::new("lys", PartOfSpeech::Noun))
            .with_candidate(
                Language::Swedish,
                Candidate::new("ljus", PartOfSpeech::Adjective),
            );
        assert_eq!(vote_pos(&entry, &options), PartOfSpeech::Noun);
    }

    #[test]
    fn pos_vote_tie_keeps_language_order() {
        let options = BuildOptions::default();
        // 2 (norwegian, noun) vs 2 (danish, verb): noun was seen first
        let entry = ConceptEntry::new("fish")
            .with_candidate(
                Language::Norwegian,
                Candidate::new("fisk", PartOfSpeech::Noun),
            )
            .with_candidate(Language::Danish, Candidate::new("fiske", PartOfSpeech::Verb));
        assert_eq!(vote_pos(&entry, &options), PartOfSpeech::Noun);
    }

    #[test]
    fn gender_vote_only_applies_to_nouns() {
        let options = BuildOptions::default();
        let entry = ConceptEntry::new("bread").with_candidate(
            Language::Norwegian,
            Candidate::new("brød", PartOfSpeech::Noun).with_gender(Gender::Neuter),
        );
        assert_eq!(
            vote_gender(&entry, &options, PartOfSpeech::Noun),
            Some(Gender::Neuter)
        );
        assert_eq!(vote_gender(&entry, &options, PartOfSpeech::Verb), None);
    }
}
