//! Input resolution for the CLI
//!
//! Turns the two positional arguments into a pair of texts, either taking
//! them verbatim or reading them from files.

use crate::config::expand_path;
use crate::error::{Result, SimError};
use std::path::Path;

/// How the two positional arguments are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arguments are the texts themselves
    Text,
    /// Arguments are paths to UTF-8 files
    Files,
}

/// The two texts being compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub first: String,
    pub second: String,
}

impl TextPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        TextPair {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Build the text pair for the given mode
pub fn resolve_pair(mode: InputMode, first: &str, second: &str) -> Result<TextPair> {
    match mode {
        InputMode::Text => Ok(TextPair::new(first, second)),
        InputMode::Files => Ok(TextPair::new(read_text(first)?, read_text(second)?)),
    }
}

/// Read a whole file as UTF-8, expanding a leading ~
pub fn read_text(path: &str) -> Result<String> {
    let expanded = expand_path(Path::new(path));
    if !expanded.is_file() {
        return Err(SimError::NotFound("File", expanded.display().to_string()));
    }

    let content = std::fs::read_to_string(&expanded)?;
    tracing::debug!(
        "Read {} chars from {}",
        content.chars().count(),
        expanded.display()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_mode_passes_through() {
        let pair = resolve_pair(InputMode::Text, "这是一个测试", "hello").unwrap();
        assert_eq!(pair, TextPair::new("这是一个测试", "hello"));
    }

    #[test]
    fn test_file_mode_reads_contents() {
        let mut file1 = NamedTempFile::new().unwrap();
        let mut file2 = NamedTempFile::new().unwrap();
        write!(file1, "我喜欢编程").unwrap();
        writeln!(file2, "我很喜欢写程序").unwrap();

        let pair = resolve_pair(
            InputMode::Files,
            file1.path().to_str().unwrap(),
            file2.path().to_str().unwrap(),
        )
        .unwrap();
        assert_eq!(pair.first, "我喜欢编程");
        assert_eq!(pair.second, "我很喜欢写程序\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let existing = dir.path().join("yes.txt");
        std::fs::write(&existing, "text").unwrap();

        let err = resolve_pair(
            InputMode::Files,
            existing.to_str().unwrap(),
            missing.to_str().unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::NotFound("File", _)));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        let err = read_text(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
