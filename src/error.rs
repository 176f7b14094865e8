//! Error types for everything around the scoring core.
//!
//! Scoring itself never fails: `SentimentAnalyzer::analyze` always returns a
//! result. Loading tables and configuration, touching the filesystem and
//! calling external collaborators can fail, and those paths use [`MoodError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by configuration, lexicon loading and file sorting.
#[derive(Debug, Error)]
pub enum MoodError {
    /// Filesystem error bound to the path that caused it
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, TOML or YAML content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization failure when writing a config or report
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// File extension not understood by the loaders
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Configuration value outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lexicon or context table violating its invariants
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Input path does not exist
    #[error("Input path not found: {0}")]
    InputNotFound(PathBuf),

    /// Source already sits at its sorted destination
    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    /// Speech-to-text collaborator failure
    #[error("Transcription failed for {path}: {reason}")]
    Transcription {
        /// Audio file
        path: PathBuf,
        /// Reason reported by the transcriber
        reason: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MoodError>;

impl MoodError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MoodError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a transcription error.
    pub fn transcription(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MoodError::Transcription {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error comes from user supplied configuration or tables.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MoodError::Parse(_)
                | MoodError::UnsupportedFormat(_)
                | MoodError::InvalidConfig(_)
                | MoodError::InvalidLexicon(_)
        )
    }
}

impl From<serde_json::Error> for MoodError {
    fn from(err: serde_json::Error) -> Self {
        MoodError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_mentions_path() {
        let err = MoodError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("no such file"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_errors_are_classified() {
        assert!(MoodError::InvalidConfig("window".into()).is_config_error());
        assert!(MoodError::InvalidLexicon("zero".into()).is_config_error());
        assert!(MoodError::UnsupportedFormat("ini".into()).is_config_error());
        assert!(!MoodError::transcription("a.wav", "timeout").is_config_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: MoodError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, MoodError::Parse(_)));
    }
}
