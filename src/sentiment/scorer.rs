//! # Scorer
//!
//! Turns a token sequence into a raw document score.
//!
//! Per sentiment token the contribution is
//! `base × tf_scaled × rarity`, then negation, intensifier tier, weakener,
//! transition boost and the document length factor are applied in that
//! order. A document containing any negator has a positive total damped once.

use super::context::{ContextFlags, ContextLists, ContextRules, IntensifierTier};
use super::lexicon::{Resolution, SentimentLexicon};
use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multipliers used by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub strong_intensifier: f64,
    pub mild_intensifier: f64,
    pub weakener: f64,
    pub transition_boost: f64,
    /// Documents with fewer tokens than this are short
    pub short_document_tokens: usize,
    pub short_document_factor: f64,
    /// Documents with more tokens than this are long
    pub long_document_tokens: usize,
    pub long_document_factor: f64,
    /// Applied once to a positive total when the document has a negator
    pub negation_damping: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strong_intensifier: 2.0,
            mild_intensifier: 1.5,
            weakener: 0.7,
            transition_boost: 1.3,
            short_document_tokens: 5,
            short_document_factor: 1.2,
            long_document_tokens: 20,
            long_document_factor: 0.9,
            negation_damping: 0.9,
        }
    }
}

impl ScoringConfig {
    /// Multipliers must be positive and finite, thresholds ordered
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("strong_intensifier", self.strong_intensifier),
            ("mild_intensifier", self.mild_intensifier),
            ("weakener", self.weakener),
            ("transition_boost", self.transition_boost),
            ("short_document_factor", self.short_document_factor),
            ("long_document_factor", self.long_document_factor),
            ("negation_damping", self.negation_damping),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(MoodError::InvalidConfig(format!(
                    "scoring.{name} must be positive, got {value}"
                )));
            }
        }
        if self.short_document_tokens > self.long_document_tokens {
            return Err(MoodError::InvalidConfig(format!(
                "scoring.short_document_tokens ({}) exceeds long_document_tokens ({})",
                self.short_document_tokens, self.long_document_tokens
            )));
        }
        Ok(())
    }

    /// Length factor for a document of `token_count` tokens
    pub fn length_factor(&self, token_count: usize) -> f64 {
        if token_count < self.short_document_tokens {
            self.short_document_factor
        } else if token_count > self.long_document_tokens {
            self.long_document_factor
        } else {
            1.0
        }
    }

    fn intensifier_factor(&self, tier: IntensifierTier) -> f64 {
        match tier {
            IntensifierTier::Strong => self.strong_intensifier,
            IntensifierTier::Mild => self.mild_intensifier,
            IntensifierTier::None => 1.0,
        }
    }
}

/// Log-damped term frequency: `tf` for `tf <= 1`, else `1 + ln(tf)`
pub fn scale_term_frequency(tf: usize) -> f64 {
    if tf <= 1 {
        tf as f64
    } else {
        1.0 + (tf as f64).ln()
    }
}

/// Scoring detail for one sentiment-bearing token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenContribution {
    /// Position in the token sequence
    pub index: usize,
    pub token: String,
    /// Lexicon entry the token resolved to
    pub canonical: String,
    pub resolution: Resolution,
    pub base: i8,
    /// Occurrences of the token in the document
    pub term_frequency: usize,
    pub tf_scaled: f64,
    pub rarity: f64,
    pub flags: ContextFlags,
    pub length_factor: f64,
    /// Final contribution to the document score
    pub score: f64,
}

/// Output of [`Scorer::score`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreOutcome {
    /// Accumulated document score
    pub total: f64,
    /// One entry per sentiment-bearing token, in document order
    pub contributions: Vec<TokenContribution>,
    /// Human-readable trace, one line per rule application
    pub trace: Vec<String>,
    /// Whether the document-level negation damping fired
    pub damped: bool,
}

impl ScoreOutcome {
    pub fn sentiment_token_count(&self) -> usize {
        self.contributions.len()
    }
}

/// Document scorer over borrowed tables
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    lexicon: &'a SentimentLexicon,
    rules: ContextRules<'a>,
    config: &'a ScoringConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(
        lexicon: &'a SentimentLexicon,
        context: &'a ContextLists,
        window: usize,
        config: &'a ScoringConfig,
    ) -> Self {
        Self {
            lexicon,
            rules: ContextRules::new(context, window),
            config,
        }
    }

    /// Score a token sequence
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> ScoreOutcome {
        let mut term_frequency: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *term_frequency.entry(token.as_ref()).or_insert(0) += 1;
        }

        let document = self.rules.document(tokens);
        let length_factor = self.config.length_factor(tokens.len());

        let mut outcome = ScoreOutcome::default();

        for (index, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let Some(resolved) = self.lexicon.resolve(token) else {
                continue;
            };

            let tf = term_frequency.get(token).copied().unwrap_or(1);
            let tf_scaled = scale_term_frequency(tf);
            let rarity = self.lexicon.rarity_weight(token);
            let flags = self.rules.flags(tokens, index, resolved.canonical, &document);

            let mut score = f64::from(resolved.score) * tf_scaled * rarity;

            let mut parts = vec![if resolved.canonical == token {
                format!(
                    "'{token}'({}*TF{tf_scaled:.2}*IDF{rarity:.1})",
                    resolved.score
                )
            } else {
                format!(
                    "'{token}'→{}({}*TF{tf_scaled:.2}*IDF{rarity:.1})",
                    resolved.canonical, resolved.score
                )
            }];

            if flags.negated {
                score = -score;
                parts.push("negation(flip)".to_string());
            }

            let tier = self.config.intensifier_factor(flags.intensifier);
            match flags.intensifier {
                IntensifierTier::Strong => {
                    score *= tier;
                    parts.push(format!("strong intensifier(x{tier:.1})"));
                }
                IntensifierTier::Mild => {
                    score *= tier;
                    parts.push(format!("mild intensifier(x{tier:.1})"));
                }
                IntensifierTier::None => {}
            }

            if flags.weakened {
                score *= self.config.weakener;
                parts.push(format!("weakener(x{:.1})", self.config.weakener));
            }

            if flags.post_transition && document.has_transition() {
                score *= self.config.transition_boost;
                parts.push(format!("after transition(x{:.1})", self.config.transition_boost));
            }

            score *= length_factor;
            if length_factor != 1.0 {
                parts.push(format!("length(x{length_factor:.1})"));
            }

            outcome.total += score;
            outcome
                .trace
                .push(format!("{} → {score:+.2}", parts.join(" + ")));
            outcome.contributions.push(TokenContribution {
                index,
                token: token.to_string(),
                canonical: resolved.canonical.to_string(),
                resolution: resolved.via,
                base: resolved.score,
                term_frequency: tf,
                tf_scaled,
                rarity,
                flags,
                length_factor,
                score,
            });
        }

        if document.negated && outcome.total > 0.0 {
            outcome.total *= self.config.negation_damping;
            outcome.damped = true;
            outcome.trace.push(format!(
                ">> negator in document: positive total damped (x{:.1})",
                self.config.negation_damping
            ));
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn score(tokens: &[&str]) -> ScoreOutcome {
        let lexicon = SentimentLexicon::korean();
        let context = ContextLists::korean();
        let config = ScoringConfig::default();
        Scorer::new(&lexicon, &context, 3, &config).score(tokens)
    }

    #[test]
    fn test_tf_scaling() {
        assert_relative_eq!(scale_term_frequency(0), 0.0);
        assert_relative_eq!(scale_term_frequency(1), 1.0);
        assert_relative_eq!(scale_term_frequency(2), 1.0 + 2f64.ln());
        assert_relative_eq!(scale_term_frequency(4), 1.0 + 4f64.ln());
    }

    #[test]
    fn test_tf_scaling_is_sublinear_and_increasing() {
        let mut previous = scale_term_frequency(1);
        for tf in 2..50 {
            let current = scale_term_frequency(tf);
            assert!(current > previous);
            assert!(current < tf as f64);
            previous = current;
        }
    }

    #[test]
    fn test_strong_intensifier_in_window() {
        // 재미있다: 2 × 2.0 rarity × strong 2.0, five tokens so no length factor
        let outcome = score(&["이", "영화", "정말", "너무", "재미있다"]);
        assert_eq!(outcome.sentiment_token_count(), 1);
        assert_relative_eq!(outcome.total, 8.0);
        assert_eq!(outcome.contributions[0].flags.intensifier, IntensifierTier::Strong);
    }

    #[test]
    fn test_short_document_factor() {
        // 최악: -2 × 2.5 × strong 2.0 × short 1.2
        let outcome = score(&["완전", "최악", "이다"]);
        assert_relative_eq!(outcome.total, -12.0);
        assert!(outcome.trace[0].contains("length(x1.2)"));
    }

    #[test]
    fn test_long_document_factor() {
        let mut tokens = vec!["것"; 21];
        tokens.push("좋다");
        let outcome = score(&tokens);
        assert_relative_eq!(outcome.total, 1.5 * 0.9);
    }

    #[test]
    fn test_negation_flips_once() {
        // 좋다 1 × 1.5, negated, short document
        let outcome = score(&["안", "좋다"]);
        assert_relative_eq!(outcome.total, -1.5 * 1.2);
        assert!(outcome.contributions[0].flags.negated);
        assert!(!outcome.damped);
    }

    #[test]
    fn test_no_flip_word_stays_negative() {
        let outcome = score(&["안", "최악"]);
        assert!(outcome.contributions[0].score < 0.0);
        assert_relative_eq!(outcome.total, -2.0 * 2.5 * 1.2);
    }

    #[test]
    fn test_weakener_and_mild_compose() {
        // 좋다 1 × 1.5 × mild 1.5 × weakener 0.7 × short 1.2
        let outcome = score(&["꽤", "좋다", "살짝"]);
        assert_relative_eq!(outcome.total, 1.5 * 1.5 * 0.7 * 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_transition_boost_applies_after_marker_only() {
        let outcome = score(&["비싸다", "하지만", "a", "b", "c", "d", "좋다"]);
        let before = &outcome.contributions[0];
        let after = &outcome.contributions[1];
        assert!(!before.flags.post_transition);
        assert!(after.flags.post_transition);
        assert_relative_eq!(before.score, -1.6);
        assert_relative_eq!(after.score, 1.5 * 1.3);
    }

    #[test]
    fn test_document_negation_damps_positive_total_once() {
        // negator far from the sentiment word: no flip, only damping
        let outcome = score(&["못", "a", "b", "c", "좋다", "좋다", "d", "e", "f", "g"]);
        assert!(outcome.contributions.iter().all(|c| !c.flags.negated));
        assert!(outcome.damped);
        let undamped: f64 = outcome.contributions.iter().map(|c| c.score).sum();
        assert_relative_eq!(outcome.total, undamped * 0.9);
        assert!(outcome.trace.last().unwrap().starts_with(">>"));
    }

    #[test]
    fn test_document_negation_leaves_negative_total() {
        let outcome = score(&["안", "a", "b", "c", "최악"]);
        assert!(!outcome.damped);
        assert!(outcome.total < 0.0);
    }

    #[test]
    fn test_repeated_word_uses_log_tf() {
        let single = score(&["좋다"]);
        let repeated = score(&["좋다", "좋다", "좋다", "좋다"]);
        let one = single.contributions[0].score;
        let each = repeated.contributions[0].score;
        assert_eq!(repeated.contributions[0].term_frequency, 4);
        assert!(each > one);
        assert!(each < 4.0 * one);
    }

    #[test]
    fn test_prefix_resolution_is_traced() {
        let outcome = score(&["좋지", "않다"]);
        assert_eq!(outcome.contributions[0].canonical, "좋다");
        assert_eq!(outcome.contributions[0].resolution, Resolution::Prefix);
        assert!(outcome.trace[0].contains("'좋지'→좋다"));
        assert!(outcome.total < 0.0);
    }

    #[test]
    fn test_no_sentiment_tokens() {
        let outcome = score(&["그냥", "평범한", "것"]);
        assert_eq!(outcome.sentiment_token_count(), 0);
        assert_eq!(outcome.total, 0.0);
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn test_config_validation() {
        assert!(ScoringConfig::default().validate().is_ok());
        let config = ScoringConfig {
            weakener: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = ScoringConfig {
            short_document_tokens: 30,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
