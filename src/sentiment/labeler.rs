//! # Normalization and Labels
//!
//! Maps a raw document score onto a 0-100 percentage and a discrete label.

use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage reported when a document has no sentiment tokens
pub const NEUTRAL_PERCENTAGE: f64 = 50.0;

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
    VeryNegative,
    /// Empty or whitespace-only input
    Empty,
}

impl SentimentLabel {
    /// Every label, most positive first, `Empty` last
    pub const ALL: [SentimentLabel; 8] = [
        SentimentLabel::VeryPositive,
        SentimentLabel::Positive,
        SentimentLabel::SlightlyPositive,
        SentimentLabel::Neutral,
        SentimentLabel::SlightlyNegative,
        SentimentLabel::Negative,
        SentimentLabel::VeryNegative,
        SentimentLabel::Empty,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::SlightlyPositive => "slightly positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::SlightlyNegative => "slightly negative",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very negative",
            SentimentLabel::Empty => "empty",
        }
    }

    /// Korean display label
    pub fn korean(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "매우 긍정적",
            SentimentLabel::Positive => "긍정적",
            SentimentLabel::SlightlyPositive => "약간 긍정적",
            SentimentLabel::Neutral => "중립",
            SentimentLabel::SlightlyNegative => "약간 부정적",
            SentimentLabel::Negative => "부정적",
            SentimentLabel::VeryNegative => "매우 부정적",
            SentimentLabel::Empty => "빈 텍스트",
        }
    }

    /// Directory name used when sorting files
    pub fn dir_name(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very_positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::SlightlyPositive => "slightly_positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::SlightlyNegative => "slightly_negative",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very_negative",
            SentimentLabel::Empty => "empty",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            SentimentLabel::VeryPositive | SentimentLabel::Positive | SentimentLabel::SlightlyPositive
        )
    }

    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            SentimentLabel::VeryNegative | SentimentLabel::Negative | SentimentLabel::SlightlyNegative
        )
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage cut-offs, inclusive.
///
/// Positive tiers are checked first (`>=`), then negative tiers (`<=`); the
/// optional "slightly" tiers are absent in the five-tier scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelThresholds {
    pub very_positive: f64,
    pub positive: f64,
    pub slightly_positive: Option<f64>,
    pub very_negative: f64,
    pub negative: f64,
    pub slightly_negative: Option<f64>,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self::seven_tier()
    }
}

impl LabelThresholds {
    /// 80 / 60 / 52 and 20 / 40 / 48
    pub fn seven_tier() -> Self {
        Self {
            very_positive: 80.0,
            positive: 60.0,
            slightly_positive: Some(52.0),
            very_negative: 20.0,
            negative: 40.0,
            slightly_negative: Some(48.0),
        }
    }

    /// 75 / 53 and 25 / 47
    pub fn five_tier() -> Self {
        Self {
            very_positive: 75.0,
            positive: 53.0,
            slightly_positive: None,
            very_negative: 25.0,
            negative: 47.0,
            slightly_negative: None,
        }
    }

    /// Label for a percentage in [0, 100]
    pub fn label(&self, percentage: f64) -> SentimentLabel {
        if percentage >= self.very_positive {
            SentimentLabel::VeryPositive
        } else if percentage >= self.positive {
            SentimentLabel::Positive
        } else if self.slightly_positive.is_some_and(|t| percentage >= t) {
            SentimentLabel::SlightlyPositive
        } else if percentage <= self.very_negative {
            SentimentLabel::VeryNegative
        } else if percentage <= self.negative {
            SentimentLabel::Negative
        } else if self.slightly_negative.is_some_and(|t| percentage <= t) {
            SentimentLabel::SlightlyNegative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Thresholds must lie in [0, 100] and be ordered
    /// `very_negative <= negative <= slightly_negative < slightly_positive <= positive <= very_positive`
    pub fn validate(&self) -> Result<()> {
        let lower_edge = self.slightly_negative.unwrap_or(self.negative);
        let upper_edge = self.slightly_positive.unwrap_or(self.positive);
        let ordered = [
            self.very_negative,
            self.negative,
            lower_edge,
            upper_edge,
            self.positive,
            self.very_positive,
        ];
        if ordered.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(MoodError::InvalidConfig(format!(
                "label thresholds must lie in [0, 100]: {self:?}"
            )));
        }
        if ordered.windows(2).any(|w| w[0] > w[1]) || lower_edge >= upper_edge {
            return Err(MoodError::InvalidConfig(format!(
                "label thresholds are out of order: {self:?}"
            )));
        }
        Ok(())
    }
}

/// Score normalizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    /// Upper bound of a single token's contribution (K). Tunable, not exact:
    /// compounding multipliers can exceed it, hence the clamp.
    max_token_multiplier: f64,
    thresholds: LabelThresholds,
}

impl Normalizer {
    pub fn new(max_token_multiplier: f64, thresholds: LabelThresholds) -> Self {
        Self {
            max_token_multiplier,
            thresholds,
        }
    }

    /// Percentage and label for a raw score over `sentiment_tokens` tokens
    pub fn normalize(&self, total_score: f64, sentiment_tokens: usize) -> (f64, SentimentLabel) {
        if sentiment_tokens == 0 {
            return (NEUTRAL_PERCENTAGE, SentimentLabel::Neutral);
        }

        let max_possible = sentiment_tokens as f64 * self.max_token_multiplier;
        let min_possible = -max_possible;
        let range = max_possible - min_possible;

        let normalized = if range <= 0.0 || !range.is_finite() || !total_score.is_finite() {
            0.5
        } else {
            ((total_score - min_possible) / range).clamp(0.0, 1.0)
        };

        let percentage = normalized * 100.0;
        (percentage, self.thresholds.label(percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seven_tier_boundaries_are_inclusive() {
        let t = LabelThresholds::seven_tier();
        assert_eq!(t.label(100.0), SentimentLabel::VeryPositive);
        assert_eq!(t.label(80.0), SentimentLabel::VeryPositive);
        assert_eq!(t.label(79.99), SentimentLabel::Positive);
        assert_eq!(t.label(60.0), SentimentLabel::Positive);
        assert_eq!(t.label(52.0), SentimentLabel::SlightlyPositive);
        assert_eq!(t.label(51.99), SentimentLabel::Neutral);
        assert_eq!(t.label(50.0), SentimentLabel::Neutral);
        assert_eq!(t.label(48.01), SentimentLabel::Neutral);
        assert_eq!(t.label(48.0), SentimentLabel::SlightlyNegative);
        assert_eq!(t.label(40.0), SentimentLabel::Negative);
        assert_eq!(t.label(20.01), SentimentLabel::Negative);
        assert_eq!(t.label(20.0), SentimentLabel::VeryNegative);
        assert_eq!(t.label(0.0), SentimentLabel::VeryNegative);
    }

    #[test]
    fn test_five_tier_collapses_slight_tiers() {
        let t = LabelThresholds::five_tier();
        assert_eq!(t.label(75.0), SentimentLabel::VeryPositive);
        assert_eq!(t.label(53.0), SentimentLabel::Positive);
        assert_eq!(t.label(52.0), SentimentLabel::Neutral);
        assert_eq!(t.label(48.0), SentimentLabel::Neutral);
        assert_eq!(t.label(47.0), SentimentLabel::Negative);
        assert_eq!(t.label(25.0), SentimentLabel::VeryNegative);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(LabelThresholds::seven_tier().validate().is_ok());
        assert!(LabelThresholds::five_tier().validate().is_ok());

        let mut t = LabelThresholds::seven_tier();
        t.positive = 90.0;
        assert!(t.validate().is_err());

        let mut t = LabelThresholds::seven_tier();
        t.very_positive = 120.0;
        assert!(t.validate().is_err());

        let mut t = LabelThresholds::seven_tier();
        t.slightly_negative = Some(55.0);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_zero_sentiment_tokens_is_neutral() {
        let normalizer = Normalizer::new(5.0, LabelThresholds::seven_tier());
        assert_eq!(normalizer.normalize(0.0, 0), (50.0, SentimentLabel::Neutral));
        assert_eq!(normalizer.normalize(12.0, 0), (50.0, SentimentLabel::Neutral));
    }

    #[test]
    fn test_normalization_uses_theoretical_range() {
        let normalizer = Normalizer::new(5.0, LabelThresholds::seven_tier());
        // range [-10, 10] for two tokens
        let (percentage, label) = normalizer.normalize(3.0, 2);
        assert_relative_eq!(percentage, 65.0);
        assert_eq!(label, SentimentLabel::Positive);
    }

    #[test]
    fn test_percentage_is_clamped() {
        let normalizer = Normalizer::new(5.0, LabelThresholds::seven_tier());
        assert_eq!(normalizer.normalize(1_000.0, 1).0, 100.0);
        assert_eq!(normalizer.normalize(-1_000.0, 1).0, 0.0);
        assert_eq!(normalizer.normalize(f64::NAN, 1).0, 50.0);
    }

    #[test]
    fn test_degenerate_range_is_neutral() {
        let normalizer = Normalizer::new(0.0, LabelThresholds::seven_tier());
        assert_eq!(normalizer.normalize(3.0, 2), (50.0, SentimentLabel::Neutral));
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(SentimentLabel::VeryPositive.to_string(), "very positive");
        assert_eq!(SentimentLabel::Empty.korean(), "빈 텍스트");
        assert_eq!(SentimentLabel::SlightlyNegative.dir_name(), "slightly_negative");
        assert!(SentimentLabel::ALL.iter().all(|l| !l.dir_name().contains('/')));
        assert!(!SentimentLabel::Neutral.is_positive());
        assert!(!SentimentLabel::Empty.is_negative());
        assert!(SentimentLabel::Negative.is_negative());
    }
}
