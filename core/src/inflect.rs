//! Paradigm generation.
//!
//! Inflected forms come from plain suffixation over per-POS tables. A small
//! irregular-verb table is consulted first; parts of speech the tables do
//! not cover get an empty paradigm rather than an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::candidate::{Gender, PartOfSpeech};

/// Indefinite and definite forms of one noun number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounForms {
    pub indefinite: String,
    pub definite: String,
}

/// Full noun paradigm.
///
/// The plural suffixes are the same for both genders; only the definite
/// singular article differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounParadigm {
    pub singular: NounForms,
    pub plural: NounForms,
}

/// Agreement forms of the positive degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectivePositive {
    pub common: String,
    pub neuter: String,
    pub plural: String,
    pub definite: String,
}

/// Adjective degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveParadigm {
    pub positive: AdjectivePositive,
    pub comparative: String,
    pub superlative: String,
}

/// Verb tense and participle forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbParadigm {
    pub infinitive: String,
    pub present: String,
    pub past: String,
    pub supine: String,
    pub present_participle: String,
    pub imperative: String,
}

/// The inflected forms of one entry, shaped by its part of speech.
///
/// Externally tagged with lowercase variant names so the same value
/// round-trips through both JSON and bincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paradigm {
    Noun(NounParadigm),
    Adjective(AdjectiveParadigm),
    Verb(VerbParadigm),
    Empty,
}

impl Paradigm {
    pub fn is_empty(&self) -> bool {
        matches!(self, Paradigm::Empty)
    }

    /// Every inflected surface form, for wordlist export.
    pub fn surface_forms(&self) -> Vec<&str> {
        match self {
            Paradigm::Noun(noun) => vec![
                noun.singular.indefinite.as_str(),
                noun.singular.definite.as_str(),
                noun.plural.indefinite.as_str(),
                noun.plural.definite.as_str(),
            ],
            Paradigm::Adjective(adj) => vec![
                adj.positive.common.as_str(),
                adj.positive.neuter.as_str(),
                adj.positive.plural.as_str(),
                adj.positive.definite.as_str(),
                adj.comparative.as_str(),
                adj.superlative.as_str(),
            ],
            Paradigm::Verb(verb) => vec![
                verb.infinitive.as_str(),
                verb.present.as_str(),
                verb.past.as_str(),
                verb.supine.as_str(),
                verb.present_participle.as_str(),
                verb.imperative.as_str(),
            ],
            Paradigm::Empty => Vec::new(),
        }
    }
}

/// Fully spelled-out paradigms for the common irregular verbs, keyed by
/// every lemma shape the transformation pipeline can hand over.
static IRREGULAR_VERBS: Lazy<HashMap<&'static str, VerbParadigm>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "være",
        VerbParadigm {
            infinitive: "være".to_string(),
            present: "er".to_string(),
            past: "var".to_string(),
            supine: "vært".to_string(),
            present_participle: "værende".to_string(),
            imperative: "vær".to_string(),
        },
    );
    m.insert(
        "ha",
        VerbParadigm {
            infinitive: "ha".to_string(),
            present: "har".to_string(),
            past: "hadde".to_string(),
            supine: "hatt".to_string(),
            present_participle: "havende".to_string(),
            imperative: "ha".to_string(),
        },
    );
    m.insert(
        "gå",
        VerbParadigm {
            infinitive: "gå".to_string(),
            present: "går".to_string(),
            past: "gikk".to_string(),
            supine: "gått".to_string(),
            present_participle: "gående".to_string(),
            imperative: "gå".to_string(),
        },
    );
    m
});

/// Generate the paradigm for a canonical stem.
///
/// `gender` is only consulted for nouns; a missing gender inflects as
/// common. Parts of speech without a paradigm table yield `Paradigm::Empty`.
pub fn inflect(stem: &str, pos: PartOfSpeech, gender: Option<Gender>) -> Paradigm {
    match pos {
        PartOfSpeech::Noun => Paradigm::Noun(inflect_noun(stem, gender)),
        PartOfSpeech::Adjective => Paradigm::Adjective(inflect_adjective(stem)),
        PartOfSpeech::Verb => Paradigm::Verb(inflect_verb(stem)),
        _ => Paradigm::Empty,
    }
}

fn inflect_noun(stem: &str, gender: Option<Gender>) -> NounParadigm {
    let definite_suffix = match gender {
        Some(Gender::Neuter) => "et",
        _ => "en",
    };
    NounParadigm {
        singular: NounForms {
            indefinite: stem.to_string(),
            definite: format!("{stem}{definite_suffix}"),
        },
        plural: NounForms {
            indefinite: format!("{stem}ar"),
            definite: format!("{stem}arna"),
        },
    }
}

fn inflect_adjective(stem: &str) -> AdjectiveParadigm {
    AdjectiveParadigm {
        positive: AdjectivePositive {
            common: stem.to_string(),
            neuter: format!("{stem}t"),
            plural: format!("{stem}e"),
            definite: format!("{stem}e"),
        },
        comparative: format!("{stem}ere"),
        superlative: format!("{stem}est"),
    }
}

fn inflect_verb(stem: &str) -> VerbParadigm {
    if let Some(forms) = IRREGULAR_VERBS.get(stem) {
        return forms.clone();
    }
    let root = verb_root(stem);
    VerbParadigm {
        infinitive: format!("{root}a"),
        present: format!("{root}er"),
        past: format!("{root}ede"),
        supine: format!("{root}et"),
        present_participle: format!("{root}ende"),
        imperative: root.to_string(),
    }
}

/// Bare verb root.
///
/// Canonical verb stems arrive either in the present shape (`arbeider`) or
/// as an infinitive (`kasta`), so a trailing `er` is stripped before a
/// trailing `a`. The root is never emptied.
fn verb_root(stem: &str) -> &str {
    if let Some(root) = stem.strip_suffix("er") {
        if !root.is_empty() {
            return root;
        }
    }
    if let Some(root) = stem.strip_suffix('a') {
        if !root.is_empty() {
            return root;
        }
    }
    stem
}
