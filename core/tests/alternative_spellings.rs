// Alternative spelling derivation.
//
// Variants come from three independent checks: the question-word variant
// table, symmetric digraph swaps (ej/ei, øj/øy, aj/ai in both directions),
// and the combined vowel-system swap (æ/ø vs ä/ö, one variant per
// direction). A canonical form never appears among its own alternatives.

use nordum_core::{alternatives, AlternativeSpelling};

fn spellings(canonical: &str, concept: &str) -> Vec<String> {
    alternatives(canonical, concept)
        .into_iter()
        .map(|alt| alt.spelling)
        .collect()
}

#[test]
fn vowel_system_variant_for_ae_oe_words() {
    let alts = alternatives("brød", "bread");
    assert_eq!(alts.len(), 1);
    assert_eq!(alts[0].spelling, "bröd");
    assert!(alts[0].rationale.contains("vowel-system"));
}

#[test]
fn combined_swap_covers_both_vowels_at_once() {
    // one variant with every æ and ø replaced, not one per occurrence
    assert_eq!(spellings("sæbeskrøne", "tall tale"), vec!["säbeskröne"]);
}

#[test]
fn reverse_vowel_direction_fires_for_table_spellings() {
    // varför is the one canonical spelling that carries ö
    assert_eq!(spellings("varför", "why"), vec!["varfør"]);
}

#[test]
fn modern_digraphs_restore_their_traditional_spelling() {
    assert_eq!(spellings("arbeider", "work"), vec!["arbejder"]);
    assert_eq!(spellings("hai", "shark"), vec!["haj"]);
}

#[test]
fn oy_words_emit_both_digraph_and_vowel_variants() {
    let alts = spellings("høy", "high");
    assert_eq!(alts, vec!["høj", "höy"]);
}

#[test]
fn both_digraph_directions_can_fire_on_one_word() {
    let alts = spellings("hejei", "test");
    assert!(alts.contains(&"heiei".to_string()));
    assert!(alts.contains(&"hejej".to_string()));
}

#[test]
fn question_word_variants_come_from_the_table() {
    assert_eq!(spellings("vad", "what"), vec!["va"]);
    assert_eq!(spellings("vor", "where"), vec!["var"]);
    assert_eq!(spellings("ven", "when"), vec!["vornår", "når", "när"]);
}

#[test]
fn plain_words_yield_no_alternatives() {
    assert!(spellings("hus", "house").is_empty());
    assert!(spellings("fin", "fine").is_empty());
}

#[test]
fn loanword_and_numeral_concepts_yield_no_alternatives() {
    assert!(spellings("computer", "computer").is_empty());
    assert!(spellings("femti", "fifty").is_empty());
}

#[test]
fn rationales_name_the_substitution() {
    let alts = alternatives("arbeider", "work");
    assert_eq!(
        alts,
        vec![AlternativeSpelling {
            spelling: "arbejder".to_string(),
            rationale: "variant spelling with 'ej' for 'ei'".to_string(),
        }]
    );
}
