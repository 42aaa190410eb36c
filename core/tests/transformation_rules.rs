// Canonical spelling derivation.
//
// The pipeline is: loanword passthrough, numeral passthrough, question-word
// lookup (with a generic hv fallback), part-of-speech ending reshaping,
// sound-pattern digraphs, then the residual orthographic rules in table
// order. These tests walk each stage and the interactions between them.

use nordum_core::rules::{ORTHOGRAPHIC_RULES, SOUND_PATTERN_PATTERNS};
use nordum_core::{transform, PartOfSpeech};

#[test]
fn loanword_concepts_pass_through() {
    assert_eq!(transform("datamaskin", "computer", PartOfSpeech::Noun), "computer");
    assert_eq!(transform("e-post", "email", PartOfSpeech::Noun), "email");
}

#[test]
fn numeral_concepts_pass_through() {
    assert_eq!(transform("halvtreds", "fifty", PartOfSpeech::Numeral), "femti");
    assert_eq!(transform("sjuttio", "seventy", PartOfSpeech::Numeral), "sytti");
}

#[test]
fn known_question_words_take_their_table_spelling() {
    for (source, expected) in [
        ("hva", "vad"),
        ("hvad", "vad"),
        ("hvor", "vor"),
        ("hvem", "vem"),
        ("hvorfor", "varför"),
        ("hvilken", "vilken"),
        ("hvornår", "ven"),
    ] {
        assert_eq!(transform(source, "question", PartOfSpeech::Pronoun), expected);
    }
}

#[test]
fn unknown_hv_words_drop_the_silent_h() {
    assert_eq!(transform("hvile", "rest", PartOfSpeech::Verb), "vile");
    assert_eq!(transform("hval", "whale", PartOfSpeech::Noun), "val");
}

#[test]
fn swedish_present_tense_verbs_reshape_to_er() {
    assert_eq!(transform("kastar", "throw", PartOfSpeech::Verb), "kaster");
    assert_eq!(transform("arbetar", "work", PartOfSpeech::Verb), "arbeider");
}

#[test]
fn plural_shaped_nouns_reshape_to_ar() {
    assert_eq!(transform("stener", "stone", PartOfSpeech::Noun), "stenar");
    // reshaping can expose further rules: backer -> backar -> bakar
    assert_eq!(transform("backer", "hill", PartOfSpeech::Noun), "bakar");
}

#[test]
fn adjectives_keep_their_stem() {
    assert_eq!(transform("stor", "big", PartOfSpeech::Adjective), "stor");
    assert_eq!(transform("fin", "fine", PartOfSpeech::Adjective), "fin");
}

#[test]
fn sound_patterns_normalize_globally() {
    assert_eq!(transform("arbejder", "work", PartOfSpeech::Verb), "arbeider");
    assert_eq!(transform("høj", "high", PartOfSpeech::Adjective), "høy");
    assert_eq!(transform("haj", "shark", PartOfSpeech::Noun), "hai");
}

#[test]
fn residual_rules_run_last_in_table_order() {
    assert_eq!(transform("grön", "green", PartOfSpeech::Adjective), "grøn");
    assert_eq!(transform("träd", "tree", PartOfSpeech::Noun), "træd");
    assert_eq!(transform("godt", "good", PartOfSpeech::Adjective), "got");
    assert_eq!(transform("kold", "cold", PartOfSpeech::Adjective), "kol");
    assert_eq!(transform("philosophi", "philosophy", PartOfSpeech::Noun), "filosofi");
}

#[test]
fn case_and_whitespace_are_cleaned_on_entry() {
    assert_eq!(transform("  Arbejder ", "work", PartOfSpeech::Verb), "arbeider");
}

#[test]
fn canonical_outputs_are_fixed_points() {
    let samples = [
        ("arbeider", "work", PartOfSpeech::Verb),
        ("vile", "rest", PartOfSpeech::Verb),
        ("stenar", "stone", PartOfSpeech::Noun),
        ("høy", "high", PartOfSpeech::Adjective),
        ("vor", "where", PartOfSpeech::Adverb),
        ("brød", "bread", PartOfSpeech::Noun),
        ("femti", "fifty", PartOfSpeech::Numeral),
        ("computer", "computer", PartOfSpeech::Noun),
    ];
    for (word, concept, pos) in samples {
        assert_eq!(transform(word, concept, pos), word, "{word} moved");
    }
}

#[test]
fn sound_pattern_subset_matches_the_shared_table() {
    // the pipeline's stage five is exactly these three table rules
    for pattern in SOUND_PATTERN_PATTERNS {
        assert!(ORTHOGRAPHIC_RULES
            .rules()
            .iter()
            .any(|rule| rule.pattern == pattern));
    }
}
