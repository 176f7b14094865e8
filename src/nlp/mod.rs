//! # NLP Module
//!
//! Text cleaning and tokenization.

mod preprocessing;
mod tokenizer;

pub use preprocessing::TextPreprocessor;
pub use tokenizer::{PosTag, RuleTokenizer, Token, Tokenizer, WhitespaceTokenizer};
