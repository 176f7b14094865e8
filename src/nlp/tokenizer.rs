//! Tokenizer boundary and the built-in Korean fallback tokenizer.
//!
//! Morphological analysis is an external concern: production setups plug a
//! real analyzer in through [`Tokenizer`]. [`RuleTokenizer`] is a small
//! suffix-rule splitter so the crate works without one. It reduces common
//! predicate endings to the dictionary form and splits copulas and particles
//! off nouns; it makes no claim of linguistic correctness.

use super::preprocessing::TextPreprocessor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word regex is valid"));

/// Dictionary form emitted for a split-off copula
const COPULA: &str = "이다";

/// Copula endings; the remainder is emitted as a noun followed by `이다`.
/// Longest first.
const COPULA_ENDINGS: &[&str] = &[
    "이었습니다",
    "이었어요",
    "이었는데",
    "이었지만",
    "이에요",
    "이었고",
    "이었다",
    "입니다",
    "이네요",
    "이지만",
    "이라서",
    "였어요",
    "이다",
    "이고",
    "이야",
    "예요",
    "였다",
];

/// Predicate endings and their dictionary-form replacement. Longest first.
const PREDICATE_ENDINGS: &[(&str, &str)] = &[
    ("했었어요", "하다"),
    ("하였어요", "하다"),
    ("했습니다", "하다"),
    ("었습니다", "다"),
    ("았습니다", "다"),
    ("했어요", "하다"),
    ("했는데", "하다"),
    ("했지만", "하다"),
    ("하지만", "하다"),
    ("합니다", "하다"),
    ("하네요", "하다"),
    ("었어요", "다"),
    ("았어요", "다"),
    ("었는데", "다"),
    ("았는데", "다"),
    ("었지만", "다"),
    ("았지만", "다"),
    ("습니다", "다"),
    ("했다", "하다"),
    ("했고", "하다"),
    ("해요", "하다"),
    ("해서", "하다"),
    ("하고", "하다"),
    ("었다", "다"),
    ("았다", "다"),
    ("었고", "다"),
    ("았고", "다"),
    ("어요", "다"),
    ("아요", "다"),
    ("에요", "다"),
    ("지만", "다"),
    ("네요", "다"),
    ("는데", "다"),
];

/// Two-syllable particles, stripped when anything remains.
const LONG_JOSA: &[&str] = &[
    "에서", "에게", "으로", "이랑", "까지", "부터", "처럼", "보다", "한테",
];

/// One-syllable particles, stripped only from words of three or more syllables
/// so that short nouns such as `별로` or `아이` survive.
const SHORT_JOSA: &[&str] = &[
    "은", "는", "이", "가", "을", "를", "도", "의", "에", "로", "와", "과", "만",
];

/// Part-of-speech tag attached by a tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Postpositional particle
    Josa,
    /// Verbal ending
    Eomi,
    Conjunction,
    Determiner,
    Punctuation,
    Other,
}

impl PosTag {
    /// Nouns, verbs, adjectives and adverbs carry sentiment; the rest can be
    /// filtered before lexicon lookup.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Verb | PosTag::Adjective | PosTag::Adverb
        )
    }
}

/// A token in document order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Surface form, already reduced to its base form by the tokenizer
    pub text: String,
    /// Optional part-of-speech tag
    pub pos: Option<PosTag>,
}

impl Token {
    /// Untagged token
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: None,
        }
    }

    /// Tagged token
    pub fn tagged(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos: Some(pos),
        }
    }
}

/// Turns raw text into an ordered token sequence.
///
/// Implementations must be shareable across threads; the analyzer holds one
/// for its whole lifetime.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`, preserving source order.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits on whitespace only and never tags. Useful for pre-tokenized input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }
}

/// Suffix-rule Korean tokenizer
#[derive(Debug, Clone, Default)]
pub struct RuleTokenizer {
    /// Text cleaner run before splitting
    preprocessor: TextPreprocessor,
    /// Words that are emitted verbatim, never split
    vocabulary: HashSet<String>,
}

impl RuleTokenizer {
    /// Create a tokenizer with an empty protected vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Protect words from suffix splitting (lexicon entries, trigger words)
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the preprocessor
    pub fn with_preprocessor(mut self, preprocessor: TextPreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Number of protected words
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn split_word(&self, word: &str, out: &mut Vec<Token>) {
        // A word that is itself an ending (`하지만`, `이다`) stands alone.
        let is_bare_ending = COPULA_ENDINGS.contains(&word)
            || PREDICATE_ENDINGS.iter().any(|(ending, _)| *ending == word);
        if is_bare_ending || self.vocabulary.contains(word) {
            out.push(Token::new(word));
            return;
        }

        if let Some(stem) = strip_ending(word, COPULA_ENDINGS.iter().copied()) {
            out.push(Token::tagged(stem, PosTag::Noun));
            out.push(Token::tagged(COPULA, PosTag::Adjective));
            return;
        }

        for (ending, replacement) in PREDICATE_ENDINGS {
            if let Some(stem) = word.strip_suffix(ending).filter(|s| !s.is_empty()) {
                out.push(Token::tagged(format!("{stem}{replacement}"), PosTag::Verb));
                return;
            }
        }

        if let Some(stem) = strip_ending(word, LONG_JOSA.iter().copied()) {
            out.push(Token::tagged(stem, PosTag::Noun));
            out.push(Token::tagged(&word[stem.len()..], PosTag::Josa));
            return;
        }

        if word.chars().count() >= 3 {
            if let Some(stem) = strip_ending(word, SHORT_JOSA.iter().copied()) {
                out.push(Token::tagged(stem, PosTag::Noun));
                out.push(Token::tagged(&word[stem.len()..], PosTag::Josa));
                return;
            }
        }

        out.push(Token::new(word));
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let clean = self.preprocessor.preprocess(text);
        let mut tokens = Vec::new();
        for word in WORD_REGEX.find_iter(&clean) {
            self.split_word(word.as_str(), &mut tokens);
        }
        tokens
    }
}

/// First ending that leaves a non-empty stem
fn strip_ending<'a>(word: &'a str, mut endings: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    endings.find_map(|ending| word.strip_suffix(ending).filter(|stem| !stem.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_predicate_endings_reduce_to_dictionary_form() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("재미있었어요 않았습니다 좋아요 훌륭해요 비싸지만");
        assert_eq!(
            texts(&tokens),
            vec!["재미있다", "않다", "좋다", "훌륭하다", "비싸다"]
        );
        assert!(tokens.iter().all(|t| t.pos == Some(PosTag::Verb)));
    }

    #[test]
    fn test_copula_split() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("최악이에요... 별로예요");
        assert_eq!(texts(&tokens), vec!["최악", "이다", "별로", "이다"]);
        assert_eq!(tokens[0].pos, Some(PosTag::Noun));
        assert_eq!(tokens[1].pos, Some(PosTag::Adjective));
    }

    #[test]
    fn test_josa_split() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("서비스가 가격은 집에서");
        assert_eq!(
            texts(&tokens),
            vec!["서비스", "가", "가격", "은", "집", "에서"]
        );
        assert_eq!(tokens[1].pos, Some(PosTag::Josa));
    }

    #[test]
    fn test_short_words_keep_final_syllable() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("별로 아이 이");
        assert_eq!(texts(&tokens), vec!["별로", "아이", "이"]);
        assert!(tokens.iter().all(|t| t.pos.is_none()));
    }

    #[test]
    fn test_standalone_conjunction_is_not_split() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("하지만 그런데");
        assert_eq!(texts(&tokens), vec!["하지만", "그런데"]);
    }

    #[test]
    fn test_vocabulary_is_protected() {
        let tokenizer = RuleTokenizer::new().with_vocabulary(["그런대로", "최악이다"]);
        let tokens = tokenizer.tokenize("그런대로 최악이다");
        assert_eq!(texts(&tokens), vec!["그런대로", "최악이다"]);
        assert_eq!(tokenizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let tokenizer = RuleTokenizer::new();
        let tokens = tokenizer.tokenize("정말!!! 너무, 좋다?");
        assert_eq!(texts(&tokens), vec!["정말", "너무", "좋다"]);
    }

    #[test]
    fn test_whitespace_tokenizer() {
        let tokens = WhitespaceTokenizer.tokenize(" 안  최악 ");
        assert_eq!(texts(&tokens), vec!["안", "최악"]);
    }

    #[test]
    fn test_content_tags() {
        assert!(PosTag::Noun.is_content());
        assert!(PosTag::Adverb.is_content());
        assert!(!PosTag::Josa.is_content());
        assert!(!PosTag::Conjunction.is_content());
    }
}
