//! Cognate similarity across candidate spellings.

use crate::normalize::normalize;

/// Mean pairwise normalized Levenshtein similarity over a word set.
///
/// Each unordered pair scores `1 - distance / max_len` on the folded forms,
/// with lengths counted in characters; the result is the arithmetic mean
/// over all pairs. Fewer than two words score 0.0.
pub fn cognate_score(words: &[&str]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }
    let folded: Vec<String> = words.iter().map(|w| normalize(w)).collect();
    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..folded.len() {
        for j in (i + 1)..folded.len() {
            total += pair_similarity(&folded[i], &folded[j]);
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Similarity of one folded pair. Identical strings, including two empty
/// ones, score 1.0.
fn pair_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    let distance = strsim::levenshtein(a, b);
    1.0 - distance as f64 / max_len as f64
}
