//! # Text Preprocessing
//!
//! Cleaning applied before tokenization.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL regex is valid"));
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("mention regex is valid"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Text preprocessor for review-style Korean text
#[derive(Debug, Clone)]
pub struct TextPreprocessor {
    /// Remove URLs before tokenizing
    strip_urls: bool,
    /// Remove `@mentions` before tokenizing
    strip_mentions: bool,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    /// Create a preprocessor that strips URLs and mentions
    pub fn new() -> Self {
        Self {
            strip_urls: true,
            strip_mentions: true,
        }
    }

    /// Keep or remove URLs
    pub fn with_url_stripping(mut self, strip: bool) -> Self {
        self.strip_urls = strip;
        self
    }

    /// Keep or remove mentions
    pub fn with_mention_stripping(mut self, strip: bool) -> Self {
        self.strip_mentions = strip;
        self
    }

    /// Preprocess text for tokenization
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC), so decomposed jamo compose into syllables
    /// 2. Remove URLs
    /// 3. Remove mentions
    /// 4. Normalize whitespace
    ///
    /// Case is preserved: Hangul has none, and transition markers such as
    /// `BUT` are matched verbatim.
    pub fn preprocess(&self, text: &str) -> String {
        let mut clean: String = text.nfc().collect();

        if self.strip_urls {
            clean = URL_REGEX.replace_all(&clean, " ").into_owned();
        }
        if self.strip_mentions {
            clean = MENTION_REGEX.replace_all(&clean, " ").into_owned();
        }

        WHITESPACE_REGEX
            .replace_all(&clean, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_basic() {
        let preprocessor = TextPreprocessor::new();
        assert_eq!(preprocessor.preprocess("  정말   좋아요  "), "정말 좋아요");
    }

    #[test]
    fn test_remove_urls_and_mentions() {
        let preprocessor = TextPreprocessor::new();
        let text = "@friend 이 영화 https://example.com/review 최고";
        assert_eq!(preprocessor.preprocess(text), "이 영화 최고");
    }

    #[test]
    fn test_keep_urls_when_disabled() {
        let preprocessor = TextPreprocessor::new().with_url_stripping(false);
        let clean = preprocessor.preprocess("리뷰 www.example.com");
        assert!(clean.contains("www.example.com"));
    }

    #[test]
    fn test_nfc_composes_jamo() {
        // "좋" written as conjoining jamo
        let decomposed = "\u{110C}\u{1169}\u{11C2}";
        let preprocessor = TextPreprocessor::new();
        assert_eq!(preprocessor.preprocess(decomposed), "좋");
    }

    #[test]
    fn test_case_preserved() {
        let preprocessor = TextPreprocessor::new();
        assert_eq!(preprocessor.preprocess("good BUT slow"), "good BUT slow");
    }
}
