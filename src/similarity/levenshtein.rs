//! Weighted Levenshtein similarity
//!
//! Edit costs depend on script: CJK insertions and deletions cost more than
//! Latin ones, and substituting across scripts costs the most. The raw
//! distance is turned into a ratio and then scaled by a length-ratio factor
//! chosen by text length and script composition.
//!
//! # Costs
//! | Operation | CJK | Other | Mixed |
//! |-----------|-----|-------|-------|
//! | Insert / delete | 1.0 | 0.8 | - |
//! | Substitute | 0.8 | 0.6 | 1.0 |

use super::tokenize::{collapse_whitespace, CjkCoverage};

const COVERAGE: CjkCoverage = CjkCoverage::Extended;

/// Shorter side below this many chars uses the short-text factor
const SHORT_TEXT_LEN: usize = 5;

fn is_cjk(c: char) -> bool {
    COVERAGE.contains(c)
}

fn indel_cost(c: char) -> f64 {
    if is_cjk(c) {
        1.0
    } else {
        0.8
    }
}

fn replace_cost(a: char, b: char) -> f64 {
    match (is_cjk(a), is_cjk(b)) {
        (true, true) => 0.8,
        (false, false) => 0.6,
        _ => 1.0,
    }
}

/// Every non-whitespace char is a CJK ideograph
fn all_cjk(chars: &[char]) -> bool {
    chars.iter().all(|&c| is_cjk(c) || c.is_whitespace())
}

/// Weighted edit distance over the full (len1+1)×(len2+1) matrix
///
/// The first row and column keep plain index costs (`dp[i][0] = i`) while
/// interior cells use the weighted costs above. Memory grows as len1×len2,
/// so comparing two large files allocates a matrix of that size.
pub fn weighted_edit_distance(a: &[char], b: &[char]) -> f64 {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0.0_f64; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as f64;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j as f64;
    }

    for i in 1..=m {
        let c1 = a[i - 1];
        for j in 1..=n {
            let c2 = b[j - 1];
            dp[i][j] = if c1 == c2 {
                dp[i - 1][j - 1]
            } else {
                (dp[i - 1][j] + indel_cost(c1))
                    .min(dp[i][j - 1] + indel_cost(c2))
                    .min(dp[i - 1][j - 1] + replace_cost(c1, c2))
            };
        }
    }

    dp[m][n]
}

/// Length- and script-adjusted similarity derived from the weighted distance
fn adjusted_similarity(a: &[char], b: &[char]) -> f64 {
    let (len1, len2) = (a.len(), b.len());
    let max_len = len1.max(len2);
    let min_len = len1.min(len2);
    if max_len == 0 {
        return 1.0;
    }

    let distance = weighted_edit_distance(a, b);
    let base = 1.0 - distance / max_len as f64;
    let length_ratio = min_len as f64 / max_len as f64;

    let factor = if min_len < SHORT_TEXT_LEN {
        0.7 + 0.3 * length_ratio
    } else if all_cjk(a) && all_cjk(b) {
        0.9 + 0.1 * length_ratio
    } else {
        0.8 + 0.2 * length_ratio
    };
    tracing::debug!(distance, base, factor, "levenshtein scored");

    (base * factor).clamp(0.0, 1.0)
}

/// Weighted Levenshtein similarity of two texts in [0.0, 1.0]
pub fn levenshtein_similarity(text1: Option<&str>, text2: Option<&str>) -> f64 {
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

    let text1 = collapse_whitespace(text1);
    let text2 = collapse_whitespace(text2);
    if text1 == text2 {
        return 1.0;
    }

    let a: Vec<char> = text1.chars().collect();
    let b: Vec<char> = text2.chars().collect();
    adjusted_similarity(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lev(a: &str, b: &str) -> f64 {
        levenshtein_similarity(Some(a), Some(b))
    }

    fn dist(a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        weighted_edit_distance(&a, &b)
    }

    #[test]
    fn test_weighted_distance_costs() {
        assert_eq!(dist("", ""), 0.0);
        assert!((dist("cat", "hat") - 0.6).abs() < 1e-9);
        assert!((dist("测试", "测验") - 0.8).abs() < 1e-9);
        assert!((dist("a", "测") - 1.0).abs() < 1e-9);
        // Deleting a trailing Latin char is cheaper than a CJK one
        assert!((dist("abc", "ab") - 0.8).abs() < 1e-9);
        assert!((dist("测试文", "测试") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_borders_are_unweighted() {
        // Against an empty side only the border row/column is read
        assert_eq!(dist("abc", ""), 3.0);
        assert_eq!(dist("", "测试"), 2.0);
    }

    #[test]
    fn test_identical() {
        assert!((lev("这是一个测试", "这是一个测试") - 1.0).abs() < 0.001);
        assert_eq!(lev("  hello   world ", "hello world"), 1.0);
    }

    #[test]
    fn test_one_char_different() {
        let sim = lev("这是一个测试", "这是一个试验");
        assert!(sim > 0.6, "similarity {sim} should be > 0.6");
    }

    #[test]
    fn test_partially_different() {
        let sim = lev("软件工程师", "软件测试员");
        assert!(sim > 0.4 && sim < 0.8, "similarity {sim} should be in (0.4, 0.8)");
        // Three CJK substitutions over five chars, pure-CJK factor of 1.0
        assert!((sim - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_completely_different() {
        let sim = lev("这是一个测试", "完全不同文本");
        assert!(sim < 0.4, "similarity {sim} should be < 0.4");
    }

    #[test]
    fn test_short_text() {
        let sim = lev("软件开发", "软件测试");
        assert!(sim > 0.4 && sim < 0.8, "similarity {sim} should be in (0.4, 0.8)");
    }

    #[test]
    fn test_long_sentences_one_phrase_changed() {
        let sim = lev(
            "中国是一个伟大的国家，有着悠久的历史文化。",
            "中国是一个伟大的国家，具有深厚的历史文化。",
        );
        assert!(sim > 0.7, "similarity {sim} should be > 0.7");
    }

    #[test]
    fn test_cjk_factor_unequal_lengths() {
        // Two CJK insertions: base 5/7, ratio 5/7, factor 0.9 + 0.1·ratio
        let sim = lev("软件工程师", "软件工程师傅们");
        let expected = (5.0 / 7.0) * (0.9 + 0.1 * (5.0 / 7.0));
        assert!((sim - expected).abs() < 1e-9, "similarity {sim} should be {expected}");
        assert!((sim - 34.0 / 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_latin_factor_unequal_lengths() {
        // One Latin insertion (0.8): base 6.2/7, ratio 6/7, factor 0.8 + 0.2·ratio
        let sim = lev("kitten", "kittens");
        let expected = (1.0 - 0.8 / 7.0) * (0.8 + 0.2 * (6.0 / 7.0));
        assert!((sim - expected).abs() < 1e-9, "similarity {sim} should be {expected}");
    }

    #[test]
    fn test_mixed_script_uses_default_factor() {
        // Shared CJK prefix but Latin tail: not all-CJK, so 0.8 + 0.2·ratio
        let sim = lev("软件工程师ab", "软件工程师abc");
        let expected = (1.0 - 0.8 / 8.0) * (0.8 + 0.2 * (7.0 / 8.0));
        assert!((sim - expected).abs() < 1e-9, "similarity {sim} should be {expected}");
    }

    #[test]
    fn test_short_factor_unequal_lengths() {
        // Shorter side under 5 chars: base 0.8, ratio 3/4, factor 0.7 + 0.3·ratio
        let sim = lev("abc", "abcd");
        assert!((sim - 0.8 * 0.925).abs() < 1e-9, "similarity {sim} should be 0.74");

        // Short tier wins over the CJK tier: base 0.5, ratio 0.5, factor 0.85
        let sim = lev("软件", "软件工程");
        assert!((sim - 0.5 * 0.85).abs() < 1e-9, "similarity {sim} should be 0.425");
    }

    #[test]
    fn test_cjk_factor_ignores_whitespace() {
        // "软件 工程师" vs "软件 工程师傅们": 6 vs 8 chars, two CJK insertions.
        // The space doesn't stop the CJK tier: base 0.75, factor 0.9 + 0.1·0.75
        let sim = lev("软件  工程师", "软件 工程师傅们");
        assert!((sim - 0.75 * 0.975).abs() < 1e-9, "similarity {sim} should be 0.73125");
    }

    #[test]
    fn test_whitespace_only_against_text() {
        assert_eq!(lev("   ", "abc"), 0.0);
        assert_eq!(lev("   ", "\t"), 1.0);
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(lev("", ""), 1.0);
        assert_eq!(lev("", "测试文本"), 0.0);
        assert_eq!(lev("测试文本", ""), 0.0);
        assert_eq!(levenshtein_similarity(None, Some("测试文本")), 0.0);
        assert_eq!(levenshtein_similarity(Some("测试文本"), None), 0.0);
        assert_eq!(levenshtein_similarity(None, None), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("软件工程师", "软件测试员"), ("kitten", "sitting"), ("abc测试", "测试abc")];
        for (a, b) in pairs {
            assert!((lev(a, b) - lev(b, a)).abs() < 1e-12);
        }
    }
}
