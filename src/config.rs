//! Configuration management for Textsim
//!
//! Loads settings from TOML file at ~/.textsim/config.toml

use crate::error::{Result, SimError};
use crate::similarity::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Algorithm selection
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Result formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// Algorithm selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Algorithm used when none is given on the command line (default: cosine)
    #[serde(default)]
    pub algorithm: Algorithm,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Similarity: 73.42%`
    #[default]
    Text,
    /// JSON object with algorithm and raw similarity
    Json,
}

impl OutputFormat {
    /// Parse from config/env string value
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Result formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places in the percentage (default: 2)
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Output format (default: text)
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_precision() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let expanded_path = expand_path(path.as_ref());

        if !expanded_path.exists() {
            return Err(SimError::Config(format!(
                "Configuration file not found: {}",
                expanded_path.display()
            )));
        }

        let content = std::fs::read_to_string(&expanded_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Load configuration from file, falling back to defaults when the file is absent
    ///
    /// A file that exists but can't be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let expanded_path = expand_path(path.as_ref());
        if !expanded_path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                expanded_path.display()
            );
            return Ok(Config::default());
        }
        Self::from_file(&expanded_path)
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".textsim").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".textsim/config.toml"))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SimError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored with a warning rather than failing the run.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("TEXTSIM_ALGORITHM") {
            match Algorithm::from_name(&name) {
                Ok(algorithm) => self.similarity.algorithm = algorithm,
                Err(e) => tracing::warn!("Ignoring TEXTSIM_ALGORITHM: {}", e),
            }
        }
        if let Ok(precision) = std::env::var("TEXTSIM_PRECISION") {
            match precision.parse() {
                Ok(precision) => self.output.precision = precision,
                Err(_) => tracing::warn!("Ignoring TEXTSIM_PRECISION: {:?}", precision),
            }
        }
        if let Ok(format) = std::env::var("TEXTSIM_FORMAT") {
            match OutputFormat::from_config_str(&format) {
                Some(format) => self.output.format = format,
                None => tracing::warn!("Ignoring TEXTSIM_FORMAT: {:?}", format),
            }
        }
    }

    /// Create a default configuration file at the given path
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let content = r#"# Textsim Configuration

[similarity]
# Algorithm used when -a/--algorithm is not given
# "cosine"      = term-frequency cosine (default)
# "jaccard"     = token/bigram set overlap, blended with characters for long text
# "levenshtein" = script-weighted edit distance
algorithm = "cosine"

[output]
# Decimal places in the printed percentage
precision = 2

# "text" prints "Similarity: 73.42%", "json" prints the raw score
format = "text"
"#;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }
}

/// Expand ~ to home directory in paths
pub fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
