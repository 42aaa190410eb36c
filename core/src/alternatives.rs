//! Secondary valid spellings for canonical entries.

use serde::{Deserialize, Serialize};

use crate::wordlists;

/// One alternative spelling with the reason it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSpelling {
    pub spelling: String,
    pub rationale: String,
}

impl AlternativeSpelling {
    fn new<S: Into<String>, R: Into<String>>(spelling: S, rationale: R) -> Self {
        Self {
            spelling: spelling.into(),
            rationale: rationale.into(),
        }
    }
}

/// The sound-pattern digraph pairs, swapped in either direction.
const DIGRAPH_PAIRS: [(&str, &str); 3] = [("ej", "ei"), ("øj", "øy"), ("aj", "ai")];

/// Derive the alternative spellings for a canonical form.
///
/// Checks are independent; a word can yield several variants. Loanword and
/// numeral concepts keep their fixed spellings and yield none. The caller
/// deduplicates against existing lexicon keys.
pub fn alternatives(canonical: &str, concept: &str) -> Vec<AlternativeSpelling> {
    if wordlists::is_loanword(concept) || wordlists::numeral_for(concept).is_some() {
        return Vec::new();
    }

    let mut out: Vec<AlternativeSpelling> = Vec::new();

    for variant in wordlists::question_word_variants(canonical) {
        push_unique(
            &mut out,
            AlternativeSpelling::new(*variant, format!("spoken variant of '{canonical}'")),
        );
    }

    for (traditional, modern) in DIGRAPH_PAIRS {
        if canonical.contains(traditional) {
            push_unique(
                &mut out,
                AlternativeSpelling::new(
                    canonical.replace(traditional, modern),
                    format!("variant spelling with '{modern}' for '{traditional}'"),
                ),
            );
        }
        if canonical.contains(modern) {
            push_unique(
                &mut out,
                AlternativeSpelling::new(
                    canonical.replace(modern, traditional),
                    format!("variant spelling with '{traditional}' for '{modern}'"),
                ),
            );
        }
    }

    if canonical.contains('æ') || canonical.contains('ø') {
        push_unique(
            &mut out,
            AlternativeSpelling::new(
                canonical.replace('æ', "ä").replace('ø', "ö"),
                "vowel-system variant using ä/ö",
            ),
        );
    }
    if canonical.contains('ä') || canonical.contains('ö') {
        push_unique(
            &mut out,
            AlternativeSpelling::new(
                canonical.replace('ä', "æ").replace('ö', "ø"),
                "vowel-system variant using æ/ø",
            ),
        );
    }

    out.retain(|alt| alt.spelling != canonical);
    out
}

fn push_unique(out: &mut Vec<AlternativeSpelling>, alt: AlternativeSpelling) {
    if !out.iter().any(|existing| existing.spelling == alt.spelling) {
        out.push(alt);
    }
}
