//! # Sentiment Module
//!
//! Lexicon lookup, context rules, scoring and labeling.

mod analyzer;
mod context;
mod korean;
mod labeler;
mod lexicon;
mod scorer;

pub use analyzer::{AnalysisResult, LineAnalysis, SentimentAnalyzer};
pub use context::{ContextFlags, ContextLists, ContextRules, DocumentContext, IntensifierTier};
pub use labeler::{LabelThresholds, Normalizer, SentimentLabel, NEUTRAL_PERCENTAGE};
pub use lexicon::{Resolution, Resolved, SentimentLexicon, StemMatch, DEFAULT_RARITY};
pub use scorer::{scale_term_frequency, ScoreOutcome, Scorer, ScoringConfig, TokenContribution};
