//! Script-aware segmentation shared by all calculators
//!
//! Every CJK ideograph is a token of its own; contiguous runs of letters and
//! digits form one token; everything else (whitespace, punctuation, symbols)
//! only separates.
//!
//! Example: "Rust编程, 2024!" → ["rust", "编", "程", "2024"]

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Runs of punctuation or whitespace, collapsed to one space before cosine tokenization
static PUNCT_OR_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\s]+").expect("valid punctuation regex"));

/// Runs of whitespace, collapsed before edit distance
static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Which Unicode blocks count as CJK ideographs
///
/// Cosine only looks at the base block while Jaccard and Levenshtein also
/// accept Extension A and B. Unifying the two changes scores for text using
/// the extension blocks, so the split is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjkCoverage {
    /// CJK Unified Ideographs (U+4E00..U+9FFF)
    Unified,
    /// Unified Ideographs plus Extension A and Extension B
    Extended,
}

impl CjkCoverage {
    /// Check whether `c` falls inside the covered blocks
    pub fn contains(self, c: char) -> bool {
        match self {
            CjkCoverage::Unified => matches!(c, '\u{4E00}'..='\u{9FFF}'),
            CjkCoverage::Extended => matches!(c,
                '\u{4E00}'..='\u{9FFF}'       // CJK Unified Ideographs
                | '\u{3400}'..='\u{4DBF}'     // Extension A
                | '\u{20000}'..='\u{2A6DF}'   // Extension B
            ),
        }
    }
}

/// Script class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cjk,
    Other,
}

/// Classify a character as CJK ideograph or anything else
pub fn classify_script(c: char, coverage: CjkCoverage) -> Script {
    if coverage.contains(c) {
        Script::Cjk
    } else {
        Script::Other
    }
}

/// Letters and digits in any script
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Split text into lower-cased tokens, left to right
pub fn tokenize(text: &str, coverage: CjkCoverage) -> Vec<String> {
    let text = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut word_buf = String::new();

    let flush_word = |buf: &mut String, tokens: &mut Vec<String>| {
        if !buf.is_empty() {
            tokens.push(std::mem::take(buf));
        }
    };

    for c in text.chars() {
        if classify_script(c, coverage) == Script::Cjk {
            flush_word(&mut word_buf, &mut tokens);
            tokens.push(c.to_string());
        } else if is_word_char(c) {
            word_buf.push(c);
        } else {
            flush_word(&mut word_buf, &mut tokens);
        }
    }

    flush_word(&mut word_buf, &mut tokens);
    tokens
}

/// Distinct lower-cased letters, digits and CJK ideographs
pub fn character_set(text: &str, coverage: CjkCoverage) -> HashSet<char> {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || coverage.contains(c))
        .collect()
}

/// Replace runs of punctuation/whitespace with a single space and trim
pub fn strip_punctuation(text: &str) -> String {
    PUNCT_OR_SPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Trim and collapse whitespace runs to a single space
pub fn collapse_whitespace(text: &str) -> String {
    SPACE_RUN_RE.replace_all(text.trim(), " ").into_owned()
}
