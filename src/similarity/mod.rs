//! Similarity calculators
//!
//! Three interchangeable algorithms share one tokenizer:
//! - Cosine over term-frequency vectors
//! - Jaccard over token + bigram sets, blended with characters for long text
//! - Weighted Levenshtein with script-aware edit costs
//!
//! All calculators are pure and total: absent input scores 0.0, two empty
//! strings score 1.0, and every result lies in [0.0, 1.0].
//! Adding an algorithm requires only an enum variant and match arms here.

pub mod cosine;
pub mod jaccard;
pub mod levenshtein;
pub mod tokenize;

pub use cosine::cosine_similarity;
pub use jaccard::jaccard_similarity;
pub use levenshtein::{levenshtein_similarity, weighted_edit_distance};
pub use tokenize::{classify_script, tokenize, CjkCoverage, Script};

use crate::error::{Result, SimError};
use std::fmt;
use std::str::FromStr;

/// Supported similarity algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Cosine,
    Jaccard,
    Levenshtein,
}

impl Algorithm {
    /// Every algorithm, in display order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Cosine,
        Algorithm::Jaccard,
        Algorithm::Levenshtein,
    ];

    /// Parse an algorithm name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "cosine" => Ok(Algorithm::Cosine),
            "jaccard" => Ok(Algorithm::Jaccard),
            "levenshtein" => Ok(Algorithm::Levenshtein),
            _ => Err(SimError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Cosine => "cosine",
            Algorithm::Jaccard => "jaccard",
            Algorithm::Levenshtein => "levenshtein",
        }
    }

    /// Similarity of two optional texts in [0.0, 1.0]
    pub fn calculate(&self, text1: Option<&str>, text2: Option<&str>) -> f64 {
        match self {
            Algorithm::Cosine => cosine_similarity(text1, text2),
            Algorithm::Jaccard => jaccard_similarity(text1, text2),
            Algorithm::Levenshtein => levenshtein_similarity(text1, text2),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
    }
}

/// Look up an algorithm by name and score the pair with it
pub fn calculate(algorithm: &str, text1: Option<&str>, text2: Option<&str>) -> Result<f64> {
    let algorithm = Algorithm::from_name(algorithm)?;
    tracing::debug!(algorithm = %algorithm, "calculating similarity");
    Ok(algorithm.calculate(text1, text2))
}
