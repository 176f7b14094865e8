//! # datamood
//!
//! Lexicon and rule based sentiment scoring for Korean text, with a file
//! layer that sorts text and audio files into per-label directories.
//!
//! ## Modules
//!
//! - `nlp` - Text preprocessing and tokenization
//! - `sentiment` - Lexicon, context rules, scoring and labeling
//! - `sorter` - File classification and sorting
//! - `config` - Configuration presets and file I/O
//!
//! ## Example Usage
//!
//! ```
//! use datamood::{SentimentAnalyzer, SentimentLabel};
//!
//! let analyzer = SentimentAnalyzer::new();
//! let result = analyzer.analyze("완전 최악이에요");
//!
//! assert_eq!(result.label, SentimentLabel::VeryNegative);
//! assert!(result.score < 0.0);
//! for line in &result.trace {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod sentiment;
pub mod sorter;

// Re-exports for convenience
pub use config::{AppConfig, EngineConfig, LoggingSettings, SorterSettings};
pub use error::{MoodError, Result};
pub use nlp::{PosTag, RuleTokenizer, TextPreprocessor, Token, Tokenizer, WhitespaceTokenizer};
pub use sentiment::{
    AnalysisResult, ContextLists, LabelThresholds, SentimentAnalyzer, SentimentLabel,
    SentimentLexicon, StemMatch,
};
pub use sorter::{FileKind, MoodSorter, SortSummary, Transcriber};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Tokens examined on each side of a sentiment word
    pub const CONTEXT_WINDOW: usize = 3;

    /// Context window of the five-label preset
    pub const LEGACY_CONTEXT_WINDOW: usize = 2;

    /// Per-token upper bound used for normalization
    pub const MAX_TOKEN_MULTIPLIER: f64 = 5.0;

    /// Upper bound of the five-label preset
    pub const LEGACY_MAX_TOKEN_MULTIPLIER: f64 = 4.0;

    /// Output directory of the sorter
    pub const OUTPUT_DIR: &str = "sorted";

    /// Bucket for files that are neither text nor audio
    pub const UNKNOWN_BUCKET: &str = "unknown";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_presets() {
        let canonical = EngineConfig::canonical();
        assert_eq!(canonical.window, defaults::CONTEXT_WINDOW);
        assert_eq!(canonical.max_token_multiplier, defaults::MAX_TOKEN_MULTIPLIER);

        let legacy = EngineConfig::legacy();
        assert_eq!(legacy.window, defaults::LEGACY_CONTEXT_WINDOW);
        assert_eq!(legacy.max_token_multiplier, defaults::LEGACY_MAX_TOKEN_MULTIPLIER);

        let sorter = SorterSettings::default();
        assert_eq!(sorter.output_dir.to_str(), Some(defaults::OUTPUT_DIR));
        assert_eq!(sorter.unknown_bucket, defaults::UNKNOWN_BUCKET);
    }
}
