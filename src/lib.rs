//! Textsim - CJK-aware text similarity
//!
//! This crate scores how similar two texts are, from 0.0 to 1.0:
//! - Cosine similarity over term-frequency vectors
//! - Jaccard similarity over token/bigram sets with a character-level blend
//! - Weighted Levenshtein distance with script-aware edit costs
//!
//! CJK ideographs are tokens of their own; runs of letters and digits form
//! words. Absent input always scores 0.0 and never errors.
//!
//! # Usage
//!
//! As a library:
//! ```
//! use textsim::Algorithm;
//!
//! let sim = Algorithm::Cosine.calculate(Some("这是一个测试"), Some("这是一个测试"));
//! assert!((sim - 1.0).abs() < 1e-9);
//!
//! let sim = textsim::calculate("levenshtein", Some("软件工程师"), Some("软件测试员")).unwrap();
//! assert!(sim > 0.4 && sim < 0.8);
//! ```
//!
//! As a CLI:
//! ```text
//! textsim "我喜欢编程" "我很喜欢写程序" -a jaccard
//! textsim -f a.txt b.txt --all
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod similarity;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Result, SimError};
pub use similarity::{
    calculate, cosine_similarity, jaccard_similarity, levenshtein_similarity, Algorithm,
};
