//! Error types for Textsim

use thiserror::Error;

/// Crate error type
///
/// The similarity functions themselves never fail; these cover the edges
/// around them (configuration, input files, algorithm selection).
#[derive(Error, Debug)]
pub enum SimError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Not found error
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    /// Algorithm name that doesn't map to any calculator
    #[error("Unknown algorithm: {0} (expected one of: cosine, jaccard, levenshtein)")]
    UnknownAlgorithm(String),
}

/// Result type alias for Textsim operations
pub type Result<T> = std::result::Result<T, SimError>;
