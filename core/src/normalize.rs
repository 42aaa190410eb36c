//! Comparison-side normalization.
//!
//! `normalize` produces the folded form used for similarity scoring. The
//! folded form is never written to output; canonical spellings come from the
//! transformation pipeline instead.

use unicode_normalization::UnicodeNormalization;

/// Fold a word for cross-language comparison.
///
/// Lowercases, maps `æ` to `ä` and `ø` to `ö`, collapses `ck` to `k`,
/// rewrites a trailing `dt` to `t`, and finally drops every character
/// outside `[a-zäöå]`.
pub fn normalize(word: &str) -> String {
    let lowered = word.nfc().collect::<String>().to_lowercase();
    let folded: String = lowered
        .chars()
        .map(|c| match c {
            'æ' => 'ä',
            'ø' => 'ö',
            other => other,
        })
        .collect();
    let collapsed = folded.replace("ck", "k");
    let stripped = match collapsed.strip_suffix("dt") {
        Some(stem) => format!("{stem}t"),
        None => collapsed,
    };
    stripped
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | 'ä' | 'ö' | 'å'))
        .collect()
}

/// NFC-normalize, trim and lowercase without folding.
///
/// Used when storing source words and glosses, where the spelling itself
/// must survive.
pub fn clean(s: &str) -> String {
    s.nfc().collect::<String>().trim().to_lowercase()
}
