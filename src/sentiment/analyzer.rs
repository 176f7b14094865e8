//! # Sentiment Analyzer
//!
//! Ties the tokenizer, lexicon, context rules, scorer and normalizer together.

use super::context::ContextLists;
use super::labeler::{Normalizer, SentimentLabel};
use super::lexicon::SentimentLexicon;
use super::scorer::{Scorer, TokenContribution};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::nlp::{RuleTokenizer, Token, Tokenizer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sentiment analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original text
    pub text: String,
    /// Tokens that reached the scorer
    pub tokens: Vec<String>,
    /// Discrete label
    pub label: SentimentLabel,
    /// Raw accumulated score
    pub score: f64,
    /// Normalized score in [0, 100]
    pub percentage: f64,
    /// Number of sentiment-bearing tokens
    pub sentiment_word_count: usize,
    /// Number of tokens after filtering
    pub total_word_count: usize,
    /// One line per sentiment token, plus document-level adjustments
    pub trace: Vec<String>,
    /// Structured per-token detail
    pub contributions: Vec<TokenContribution>,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only text
    pub fn empty(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tokens: Vec::new(),
            label: SentimentLabel::Empty,
            score: 0.0,
            percentage: 0.0,
            sentiment_word_count: 0,
            total_word_count: 0,
            trace: Vec::new(),
            contributions: Vec::new(),
        }
    }

    /// Whether the input had no content at all
    pub fn is_empty(&self) -> bool {
        self.label == SentimentLabel::Empty
    }
}

/// A result tied to its 1-based line number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAnalysis {
    pub line: usize,
    pub result: AnalysisResult,
}

/// Lexicon and rule based sentiment analyzer.
///
/// Holds immutable tables only, so one instance can serve any number of
/// threads.
pub struct SentimentAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
    lexicon: SentimentLexicon,
    context: ContextLists,
    config: EngineConfig,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("lexicon_entries", &self.lexicon.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SentimentAnalyzer {
    /// Analyzer with the built-in Korean tables and canonical settings
    pub fn new() -> Self {
        Self::with_tables(
            SentimentLexicon::korean(),
            ContextLists::korean(),
            EngineConfig::canonical(),
        )
    }

    /// Build from configuration, loading table files when configured
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let lexicon = match &config.lexicon_path {
            Some(path) => SentimentLexicon::from_file(path)?,
            None => SentimentLexicon::korean(),
        };
        let context = match &config.context_path {
            Some(path) => ContextLists::from_file(path)?,
            None => ContextLists::korean(),
        };

        Ok(Self::with_tables(
            lexicon.with_stem_match(config.stem_match),
            context,
            config.clone(),
        ))
    }

    fn with_tables(lexicon: SentimentLexicon, context: ContextLists, config: EngineConfig) -> Self {
        let tokenizer = default_tokenizer(&lexicon, &context);
        Self {
            tokenizer: Box::new(tokenizer),
            lexicon,
            context,
            config,
        }
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Replace the lexicon. The default tokenizer is rebuilt so the new
    /// entries stay protected from suffix splitting; a custom tokenizer
    /// should be set afterwards.
    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self.tokenizer = Box::new(default_tokenizer(&self.lexicon, &self.context));
        self
    }

    /// Replace the context lists. Same tokenizer caveat as [`with_lexicon`](Self::with_lexicon).
    pub fn with_context(mut self, context: ContextLists) -> Self {
        self.context = context;
        self.tokenizer = Box::new(default_tokenizer(&self.lexicon, &self.context));
        self
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    pub fn context(&self) -> &ContextLists {
        &self.context
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze one text. Never fails; degenerate input yields the empty or
    /// neutral result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::empty(text);
        }

        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| self.is_eligible(token))
            .map(|token| token.text)
            .collect();

        let scorer = Scorer::new(
            &self.lexicon,
            &self.context,
            self.config.window,
            &self.config.scoring,
        );
        let outcome = scorer.score(&tokens);

        let sentiment_word_count = outcome.sentiment_token_count();
        let normalizer = Normalizer::new(self.config.max_token_multiplier, self.config.labels);
        let (percentage, label) = normalizer.normalize(outcome.total, sentiment_word_count);

        debug!(
            tokens = tokens.len(),
            sentiment_tokens = sentiment_word_count,
            score = outcome.total,
            percentage,
            label = %label,
            "analyzed text"
        );

        AnalysisResult {
            text: text.to_string(),
            total_word_count: tokens.len(),
            tokens,
            label,
            score: outcome.total,
            percentage,
            sentiment_word_count,
            trace: outcome.trace,
            contributions: outcome.contributions,
        }
    }

    /// Analyze multiple texts
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<AnalysisResult> {
        texts.iter().map(|text| self.analyze(text)).collect()
    }

    /// Analyze each non-blank line separately
    pub fn analyze_lines(&self, text: &str) -> Vec<LineAnalysis> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| LineAnalysis {
                line: index + 1,
                result: self.analyze(line.trim()),
            })
            .collect()
    }

    fn is_eligible(&self, token: &Token) -> bool {
        if !self.config.pos_filter {
            return true;
        }
        match token.pos {
            None => true,
            Some(pos) if pos.is_content() => true,
            Some(_) => {
                self.context.is_trigger(&token.text) || self.lexicon.resolve(&token.text).is_some()
            }
        }
    }
}

fn default_tokenizer(lexicon: &SentimentLexicon, context: &ContextLists) -> RuleTokenizer {
    RuleTokenizer::new().with_vocabulary(lexicon.vocabulary().chain(context.vocabulary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{PosTag, WhitespaceTokenizer};
    use approx::assert_relative_eq;

    /// Emits fixed tagged tokens regardless of input
    struct FixtureTokenizer(Vec<Token>);

    impl Tokenizer for FixtureTokenizer {
        fn tokenize(&self, _text: &str) -> Vec<Token> {
            self.0.clone()
        }
    }

    fn whitespace() -> SentimentAnalyzer {
        SentimentAnalyzer::new().with_tokenizer(WhitespaceTokenizer)
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        for text in ["", "   ", "\n\t"] {
            let result = analyzer.analyze(text);
            assert_eq!(result.label, SentimentLabel::Empty);
            assert_eq!(result.percentage, 0.0);
            assert_eq!(result.total_word_count, 0);
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_no_sentiment_words_is_neutral() {
        let result = whitespace().analyze("오늘 회의 는 세 시");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.sentiment_word_count, 0);
        assert_eq!(result.total_word_count, 5);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_positive_with_intensifiers() {
        let result = whitespace().analyze("이 영화 정말 너무 재미있다");
        assert_relative_eq!(result.score, 8.0);
        assert_relative_eq!(result.percentage, 100.0);
        assert_eq!(result.label, SentimentLabel::VeryPositive);
        assert_eq!(result.trace.len(), 1);
    }

    #[test]
    fn test_pos_filter_drops_function_words() {
        let tokenizer = FixtureTokenizer(vec![
            Token::tagged("서비스", PosTag::Noun),
            Token::tagged("가", PosTag::Josa),
            Token::tagged("좋다", PosTag::Adjective),
            Token::tagged("안", PosTag::Other),
            Token::tagged("!", PosTag::Punctuation),
        ]);
        let result = SentimentAnalyzer::new()
            .with_tokenizer(tokenizer)
            .analyze("서비스가 좋다 안!");
        assert_eq!(result.tokens, vec!["서비스", "좋다", "안"]);
        assert!(result.contributions[0].flags.negated);
    }

    #[test]
    fn test_pos_filter_can_be_disabled() {
        let config = EngineConfig {
            pos_filter: false,
            ..Default::default()
        };
        let tokenizer = FixtureTokenizer(vec![
            Token::tagged("좋다", PosTag::Adjective),
            Token::tagged("가", PosTag::Josa),
        ]);
        let result = SentimentAnalyzer::from_config(&config)
            .unwrap()
            .with_tokenizer(tokenizer)
            .analyze("x");
        assert_eq!(result.total_word_count, 2);
    }

    #[test]
    fn test_legacy_preset_labels() {
        let analyzer = SentimentAnalyzer::from_config(&EngineConfig::legacy())
            .unwrap()
            .with_tokenizer(WhitespaceTokenizer);
        // 괜찮다: 1 × 1.2 rarity × 1.2 short = 1.44; K 4 → 68%
        let result = analyzer.analyze("괜찮다");
        assert_relative_eq!(result.percentage, 68.0, epsilon = 1e-9);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_analyze_lines_skips_blank_lines() {
        let lines = whitespace().analyze_lines("좋다\n\n  \n최악\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 1);
        assert!(lines[0].result.label.is_positive());
        assert_eq!(lines[1].line, 4);
        assert!(lines[1].result.label.is_negative());
    }

    #[test]
    fn test_analyze_batch_preserves_order() {
        let results = whitespace().analyze_batch(&["최악", "", "좋다"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].label.is_negative());
        assert_eq!(results[1].label, SentimentLabel::Empty);
        assert!(results[2].label.is_positive());
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.add_word("떡상", 2).unwrap();
        let result = SentimentAnalyzer::new()
            .with_lexicon(lexicon)
            .with_tokenizer(WhitespaceTokenizer)
            .analyze("떡상 좋다");
        assert_eq!(result.sentiment_word_count, 1);
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            window: 0,
            ..Default::default()
        };
        assert!(SentimentAnalyzer::from_config(&config).is_err());
    }

    #[test]
    fn test_huge_window_from_config_still_scores() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"window": 18446744073709551615}"#).unwrap();
        let result = SentimentAnalyzer::from_config(&config)
            .unwrap()
            .with_tokenizer(WhitespaceTokenizer)
            .analyze("정말 좋다");
        assert_eq!(result.sentiment_word_count, 1);
        assert_eq!(
            result.contributions[0].flags.intensifier,
            crate::sentiment::IntensifierTier::Strong
        );
    }

    #[test]
    fn test_analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentimentAnalyzer>();
    }
}
