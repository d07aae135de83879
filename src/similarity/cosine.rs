//! Cosine similarity over term-frequency vectors
//!
//! Text is stripped of punctuation, tokenized (one token per CJK ideograph,
//! one per letter/digit run), counted, and compared as frequency vectors over
//! the union vocabulary.

use super::tokenize::{strip_punctuation, tokenize, CjkCoverage};
use std::collections::HashMap;

/// Cosine only recognizes the base ideograph block
const COVERAGE: CjkCoverage = CjkCoverage::Unified;

/// Token → occurrence count
pub type TermFrequencies = HashMap<String, u32>;

/// Build the term-frequency vector of a text
pub fn term_frequencies(text: &str) -> TermFrequencies {
    let mut vector = TermFrequencies::new();
    for token in tokenize(&strip_punctuation(text), COVERAGE) {
        *vector.entry(token).or_insert(0) += 1;
    }
    vector
}

/// Euclidean norm of a frequency vector
fn norm(vector: &TermFrequencies) -> f64 {
    vector
        .values()
        .map(|&count| f64::from(count) * f64::from(count))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two texts in [0.0, 1.0]
///
/// Absent input on either side scores 0.0. Texts that produce no tokens
/// (only punctuation/whitespace) also score 0.0.
pub fn cosine_similarity(text1: Option<&str>, text2: Option<&str>) -> f64 {
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

    let vector1 = term_frequencies(text1);
    let vector2 = term_frequencies(text2);
    tracing::debug!(
        terms1 = vector1.len(),
        terms2 = vector2.len(),
        "cosine term vectors built"
    );

    if vector1.is_empty() || vector2.is_empty() {
        return 0.0;
    }

    // Terms missing from either side contribute zero, so the smaller vector
    // is enough to cover the non-zero part of the union
    let (small, large) = if vector1.len() <= vector2.len() {
        (&vector1, &vector2)
    } else {
        (&vector2, &vector1)
    };
    let dot_product: f64 = small
        .iter()
        .filter_map(|(term, &a)| large.get(term).map(|&b| f64::from(a) * f64::from(b)))
        .sum();

    let norm1 = norm(&vector1);
    let norm2 = norm(&vector2);
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    (dot_product / (norm1 * norm2)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &str, b: &str) -> f64 {
        cosine_similarity(Some(a), Some(b))
    }

    #[test]
    fn test_identical_cjk() {
        assert!((cosine("这是一个测试", "这是一个测试") - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_completely_different_cjk() {
        let sim = cosine("这是一个测试", "完全不同的文本");
        assert!(sim < 0.3, "similarity {sim} should be < 0.3");
    }

    #[test]
    fn test_partially_similar() {
        let sim = cosine("我喜欢编程", "我很喜欢写程序");
        assert!(sim > 0.3 && sim < 0.8, "similarity {sim} should be in (0.3, 0.8)");
    }

    #[test]
    fn test_long_sentences_one_phrase_changed() {
        let sim = cosine(
            "中国是一个伟大的国家，有着悠久的历史文化。",
            "中国是一个伟大的国家，具有深厚的历史文化。",
        );
        assert!(sim > 0.7, "similarity {sim} should be > 0.7");
    }

    #[test]
    fn test_punctuation_is_ignored() {
        assert!((cosine("hello, world!", "hello world") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_weighting() {
        // [2, 0] vs [1, 1] → 2 / (2 * √2)
        let sim = cosine("a a", "a b");
        assert!((sim - 1.0 / 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(cosine("", ""), 1.0);
        assert_eq!(cosine("", "测试文本"), 0.0);
        assert_eq!(cosine("测试文本", ""), 0.0);
        assert_eq!(cosine_similarity(None, Some("测试文本")), 0.0);
        assert_eq!(cosine_similarity(Some("测试文本"), None), 0.0);
        assert_eq!(cosine_similarity(None, None), 0.0);
    }

    #[test]
    fn test_punctuation_only_has_no_terms() {
        assert_eq!(cosine("!!!", "hello"), 0.0);
        assert_eq!(cosine("...", "..."), 0.0);
    }

    #[test]
    fn test_term_frequencies() {
        let tf = term_frequencies("Rust, rust 和 Rust的");
        assert_eq!(tf.get("rust"), Some(&3));
        assert_eq!(tf.get("和"), Some(&1));
        assert_eq!(tf.get("的"), Some(&1));
        assert_eq!(tf.len(), 3);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("我喜欢编程", "我很喜欢写程序"), ("a b c", "c d"), ("软件", "soft件")];
        for (a, b) in pairs {
            assert!((cosine(a, b) - cosine(b, a)).abs() < 1e-12);
        }
    }
}
