//! Jaccard similarity over hybrid token sets
//!
//! Token sets hold every token plus the bigrams of adjacent tokens, so word
//! order carries some weight. Longer texts blend in a character-level Jaccard.

use super::tokenize::{character_set, tokenize, CjkCoverage};
use std::collections::HashSet;
use std::hash::Hash;

const COVERAGE: CjkCoverage = CjkCoverage::Extended;

/// Texts longer than this (in chars) get the character-level blend
pub const CHAR_BLEND_MIN_LEN: usize = 10;

/// Weight of the token-set score when blending
const TOKEN_WEIGHT: f64 = 0.6;

/// Weight of the character-set score when blending
const CHAR_WEIGHT: f64 = 0.4;

/// Tokens of a text unioned with the concatenation of each adjacent pair
///
/// Example: "我喜欢" → {"我", "喜", "欢", "我喜", "喜欢"}
pub fn token_set(text: &str) -> HashSet<String> {
    let tokens = tokenize(text, COVERAGE);
    let bigrams: Vec<String> = tokens
        .windows(2)
        .map(|pair| format!("{}{}", pair[0], pair[1]))
        .collect();
    tokens.into_iter().chain(bigrams).collect()
}

/// |A ∩ B| / |A ∪ B|, with an empty union scoring 0.0
fn set_jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard similarity of two texts in [0.0, 1.0]
pub fn jaccard_similarity(text1: Option<&str>, text2: Option<&str>) -> f64 {
    let (text1, text2) = match (text1, text2) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if text1.is_empty() && text2.is_empty() {
        return 1.0;
    }
    if text1.is_empty() || text2.is_empty() {
        return 0.0;
    }

    let set1 = token_set(text1);
    let set2 = token_set(text2);

    if set1.is_empty() && set2.is_empty() {
        return 1.0;
    }
    if set1.is_empty() || set2.is_empty() {
        return 0.0;
    }

    let base = set_jaccard(&set1, &set2);

    let longest = text1.chars().count().max(text2.chars().count());
    if longest <= CHAR_BLEND_MIN_LEN {
        return base;
    }

    let chars1 = character_set(text1, COVERAGE);
    let chars2 = character_set(text2, COVERAGE);
    let char_score = set_jaccard(&chars1, &chars2);
    tracing::debug!(base, char_score, "jaccard blending character sets");

    (TOKEN_WEIGHT * base + CHAR_WEIGHT * char_score).clamp(0.0, 1.0)
}
