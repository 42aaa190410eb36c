//! Curated word tables consulted before any scoring or rewriting.
//!
//! These are closed lists compiled into the binary:
//! - English loanwords kept verbatim in the target language
//! - English number glosses mapped to their Norwegian numeral forms
//! - question words with fixed target spellings and spoken variants

use phf::{phf_map, phf_set, Map, Set};

/// English concepts adopted unchanged.
///
/// Mostly modern technical and cultural vocabulary where all three source
/// languages already use the English term. Keyed by lowercase gloss.
pub static ENGLISH_LOANWORDS: Set<&'static str> = phf_set! {
    "app",
    "audio",
    "blog",
    "browser",
    "camping",
    "chat",
    "computer",
    "design",
    "digital",
    "email",
    "festival",
    "golf",
    "hamburger",
    "hardware",
    "hobby",
    "internet",
    "jazz",
    "laptop",
    "login",
    "offline",
    "online",
    "pizza",
    "podcast",
    "pop",
    "quiz",
    "radio",
    "rock",
    "router",
    "sandwich",
    "server",
    "smartphone",
    "software",
    "tablet",
    "taxi",
    "tennis",
    "video",
    "website",
    "weekend",
    "wifi",
};

/// English number glosses mapped to the Norwegian numerals adopted as-is.
pub static NORWEGIAN_NUMERALS: Map<&'static str, &'static str> = phf_map! {
    "zero" => "null",
    "one" => "en",
    "two" => "to",
    "three" => "tre",
    "four" => "fire",
    "five" => "fem",
    "six" => "seks",
    "seven" => "sju",
    "eight" => "åtte",
    "nine" => "ni",
    "ten" => "ti",
    "eleven" => "elleve",
    "twelve" => "tolv",
    "thirteen" => "tretten",
    "fourteen" => "fjorten",
    "fifteen" => "femten",
    "sixteen" => "seksten",
    "seventeen" => "sytten",
    "eighteen" => "atten",
    "nineteen" => "nitten",
    "twenty" => "tjue",
    "thirty" => "tretti",
    "forty" => "førti",
    "fifty" => "femti",
    "sixty" => "seksti",
    "seventy" => "sytti",
    "eighty" => "åtti",
    "ninety" => "nitti",
    "hundred" => "hundre",
    "thousand" => "tusen",
    "million" => "million",
};

/// Question words with fixed target spellings.
///
/// Keys are the Norwegian and Danish surface forms; the Swedish forms never
/// start with `hv` and reach the same spellings through the generic rules.
pub static QUESTION_WORDS: Map<&'static str, &'static str> = phf_map! {
    "hva" => "vad",
    "hvad" => "vad",
    "hvor" => "vor",
    "hvem" => "vem",
    "hvorfor" => "varför",
    "hvilken" => "vilken",
    "hvornår" => "ven",
};

/// Spoken-language variants recorded for canonical question-word spellings.
pub static QUESTION_WORD_VARIANTS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "vad" => &["va"],
    "vor" => &["var"],
    "ven" => &["vornår", "når", "när"],
};

/// True if `concept` is kept as an English loanword.
pub fn is_loanword(concept: &str) -> bool {
    let key = concept.trim().to_lowercase();
    ENGLISH_LOANWORDS.contains(key.as_str())
}

/// Norwegian numeral for an English number gloss, if any.
pub fn numeral_for(concept: &str) -> Option<&'static str> {
    let key = concept.trim().to_lowercase();
    NORWEGIAN_NUMERALS.get(key.as_str()).copied()
}

/// Fixed question-word spelling for a source word, if the table knows it.
pub fn question_word_for(word: &str) -> Option<&'static str> {
    QUESTION_WORDS.get(word).copied()
}

/// Spoken variants recorded for a canonical question-word spelling.
pub fn question_word_variants(canonical: &str) -> &'static [&'static str] {
    QUESTION_WORD_VARIANTS.get(canonical).copied().unwrap_or(&[])
}
