//! Result formatting for the CLI

use crate::error::Result;
use crate::similarity::Algorithm;
use serde::Serialize;

/// One algorithm's score for a text pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub algorithm: Algorithm,
    pub similarity: f64,
}

impl Score {
    /// Score a pair with the given algorithm
    pub fn compute(algorithm: Algorithm, text1: &str, text2: &str) -> Self {
        Score {
            algorithm,
            similarity: algorithm.calculate(Some(text1), Some(text2)),
        }
    }
}

/// Similarity as a percentage, e.g. `73.42%`
pub fn format_percent(similarity: f64, precision: usize) -> String {
    format!("{:.*}%", precision, similarity * 100.0)
}

/// Plain-text report, one line per score
///
/// A single unlabelled score prints as `Similarity: 73.42%`; labelled scores
/// print as `cosine: 73.42%`.
pub fn render_text(scores: &[Score], precision: usize, labelled: bool) -> String {
    scores
        .iter()
        .map(|score| {
            let label = if labelled {
                score.algorithm.name()
            } else {
                "Similarity"
            };
            format!("{}: {}", label, format_percent(score.similarity, precision))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON report: an object for one score, an array for several
pub fn render_json(scores: &[Score]) -> Result<String> {
    let json = match scores {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(scores)?,
    };
    Ok(json)
}
