// Selection cascade behavior.
//
// The selector tries, in order: curated English loanwords, curated Norwegian
// numerals, and a weighted score over the remaining candidates. These tests
// pin the cascade order, the tie-breaking, and the scoring ingredients
// (language weight, log frequency, spelling regularity).

use nordum_core::{
    select, BuildOptions, Candidate, ConceptEntry, Language, Origin, PartOfSpeech, Selection,
};

fn pick(entry: &ConceptEntry) -> Option<Selection> {
    select(entry, &BuildOptions::default())
}

fn verb(word: &str, freq: f64) -> Candidate {
    Candidate::with_frequency(word, PartOfSpeech::Verb, freq)
}

fn noun(word: &str, freq: f64) -> Candidate {
    Candidate::with_frequency(word, PartOfSpeech::Noun, freq)
}

#[test]
fn loanword_wins_regardless_of_candidates() {
    let entry = ConceptEntry::new("computer")
        .with_candidate(Language::Danish, noun("computer", 100.0))
        .with_candidate(Language::Swedish, noun("dator", 99999.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.word, "computer");
    assert_eq!(selection.origin, Origin::Loanword);
}

#[test]
fn numeral_mapping_applies_before_scoring() {
    let entry = ConceptEntry::new("fifty")
        .with_candidate(Language::Norwegian, Candidate::new("femti", PartOfSpeech::Numeral))
        .with_candidate(Language::Danish, Candidate::new("halvtreds", PartOfSpeech::Numeral))
        .with_candidate(Language::Swedish, Candidate::new("femtio", PartOfSpeech::Numeral));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.word, "femti");
    assert_eq!(selection.origin, Origin::Numeral);
}

#[test]
fn scored_fallback_prefers_weighted_norwegian() {
    let entry = ConceptEntry::new("work")
        .with_candidate(Language::Norwegian, verb("arbeider", 1500.0))
        .with_candidate(Language::Danish, verb("arbejder", 1400.0))
        .with_candidate(Language::Swedish, verb("arbetar", 1600.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.word, "arbeider");
    assert_eq!(selection.origin, Origin::Source(Language::Norwegian));
    assert!(selection.rationale.contains("Norwegian Bokmål"));
}

#[test]
fn frequency_separates_equally_weighted_languages() {
    let entry = ConceptEntry::new("house")
        .with_candidate(Language::Norwegian, noun("hus", 100.0))
        .with_candidate(Language::Danish, noun("hus", 10000.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.origin, Origin::Source(Language::Danish));
}

#[test]
fn exact_ties_keep_language_order() {
    let entry = ConceptEntry::new("house")
        .with_candidate(Language::Norwegian, noun("hus", 500.0))
        .with_candidate(Language::Danish, noun("hus", 500.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.origin, Origin::Source(Language::Norwegian));
}

#[test]
fn regularity_penalty_can_flip_equal_languages() {
    // ck costs 0.1, enough to overcome an otherwise identical score
    let entry = ConceptEntry::new("parcel")
        .with_candidate(Language::Norwegian, noun("packe", 500.0))
        .with_candidate(Language::Danish, noun("pakke", 500.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.word, "pakke");
    assert_eq!(selection.origin, Origin::Source(Language::Danish));
}

#[test]
fn swedish_wins_only_on_strong_frequency_evidence() {
    // the language weight gap is 2.0; a raw frequency gap of 100k closes it
    let entry = ConceptEntry::new("girl")
        .with_candidate(Language::Norwegian, noun("jente", 10.0))
        .with_candidate(Language::Swedish, noun("flicka", 200000.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.origin, Origin::Source(Language::Swedish));
}

#[test]
fn lone_candidate_is_selected() {
    let entry = ConceptEntry::new("lake")
        .with_candidate(Language::Swedish, noun("sjö", 250.0));
    let selection = pick(&entry).unwrap();
    assert_eq!(selection.word, "sjö");
    assert_eq!(selection.origin, Origin::Source(Language::Swedish));
}

#[test]
fn no_candidates_selects_nothing() {
    assert!(pick(&ConceptEntry::new("ghost")).is_none());
}

#[test]
fn blank_words_count_as_missing() {
    let entry = ConceptEntry::new("ghost")
        .with_candidate(Language::Norwegian, noun("", 100.0))
        .with_candidate(Language::Danish, noun("   ", 100.0));
    assert!(pick(&entry).is_none());
}

#[test]
fn loanword_on_empty_candidates_still_selects_nothing() {
    // the emptiness guard runs before the cascade
    assert!(pick(&ConceptEntry::new("computer")).is_none());
}
