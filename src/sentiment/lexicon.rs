//! # Sentiment Lexicon
//!
//! Base polarity, stem remapping and rarity weights.

use super::korean;
use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Rarity weight of words missing from the table
pub const DEFAULT_RARITY: f64 = 1.0;

/// How the prefix fallback picks among several matching stems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemMatch {
    /// First stem in table order wins
    #[default]
    InsertionOrder,
    /// Longest matching stem wins; ties go to the earlier entry
    LongestPrefix,
}

/// Which lookup rule resolved a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Word is itself a lexicon entry
    Exact,
    /// Word is a known stem
    StemRemap,
    /// Word starts with a known stem
    Prefix,
}

/// A successful lexicon lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Lexicon entry the word resolved to
    pub canonical: &'a str,
    /// Base polarity of that entry
    pub score: i8,
    /// Rule that matched
    pub via: Resolution,
}

/// Sentiment lexicon
///
/// Construct once, then share read-only. The `add_*` methods exist for
/// building alternate lexicons before handing them to an analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    /// Canonical word to base polarity in {-2, -1, 1, 2}
    polarity: HashMap<String, i8>,
    /// (stem, canonical word) pairs in insertion order
    #[serde(default)]
    stems: Vec<(String, String)>,
    /// Word to rarity weight
    #[serde(default)]
    rarity: HashMap<String, f64>,
    /// Prefix fallback policy
    #[serde(default)]
    stem_match: StemMatch,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::korean()
    }
}

impl SentimentLexicon {
    /// Empty lexicon
    pub fn empty() -> Self {
        Self {
            polarity: HashMap::new(),
            stems: Vec::new(),
            rarity: HashMap::new(),
            stem_match: StemMatch::default(),
        }
    }

    /// Built-in Korean lexicon
    pub fn korean() -> Self {
        Self {
            polarity: korean::POLARITY
                .iter()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
            stems: korean::STEMS
                .iter()
                .map(|(stem, word)| (stem.to_string(), word.to_string()))
                .collect(),
            rarity: korean::RARITY
                .iter()
                .map(|(word, weight)| (word.to_string(), *weight))
                .collect(),
            stem_match: StemMatch::default(),
        }
    }

    /// Load a lexicon from a JSON, TOML or YAML file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lexicon: Self = crate::config::load_structured(path.as_ref())?;
        lexicon.validate()?;
        info!(path = %path.as_ref().display(), entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Set the prefix fallback policy
    pub fn with_stem_match(mut self, stem_match: StemMatch) -> Self {
        self.stem_match = stem_match;
        self
    }

    /// Current prefix fallback policy
    pub fn stem_match(&self) -> StemMatch {
        self.stem_match
    }

    /// Add or replace a lexicon entry
    pub fn add_word(&mut self, word: &str, score: i8) -> Result<()> {
        check_polarity(word, score)?;
        self.polarity.insert(word.to_string(), score);
        Ok(())
    }

    /// Append a stem remap entry; it is tried after all existing stems
    pub fn add_stem(&mut self, stem: &str, canonical: &str) {
        self.stems.push((stem.to_string(), canonical.to_string()));
    }

    /// Add or replace a rarity weight
    pub fn set_rarity(&mut self, word: &str, weight: f64) -> Result<()> {
        check_rarity(word, weight)?;
        self.rarity.insert(word.to_string(), weight);
        Ok(())
    }

    /// Number of canonical entries
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }

    /// Canonical words, then stems, then rarity keys
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.polarity
            .keys()
            .map(String::as_str)
            .chain(self.stems.iter().map(|(stem, _)| stem.as_str()))
            .chain(self.rarity.keys().map(String::as_str))
    }

    /// Base polarity of `word`, or `None` for non-sentiment words
    pub fn base_score(&self, word: &str) -> Option<i8> {
        self.resolve(word).map(|resolved| resolved.score)
    }

    /// Resolve `word`: exact entry, then exact stem, then stem prefix
    pub fn resolve(&self, word: &str) -> Option<Resolved<'_>> {
        if let Some((canonical, score)) = self.entry(word) {
            return Some(Resolved {
                canonical,
                score,
                via: Resolution::Exact,
            });
        }

        let remapped = self
            .stems
            .iter()
            .filter(|(stem, _)| stem == word)
            .find_map(|(_, canonical)| self.entry(canonical));
        if let Some((canonical, score)) = remapped {
            return Some(Resolved {
                canonical,
                score,
                via: Resolution::StemRemap,
            });
        }

        let candidates = self
            .stems
            .iter()
            .filter(|(stem, _)| word.starts_with(stem.as_str()))
            .filter_map(|(stem, canonical)| {
                self.entry(canonical).map(|entry| (stem.chars().count(), entry))
            });

        let prefix = match self.stem_match {
            StemMatch::InsertionOrder => candidates.map(|(_, entry)| entry).next(),
            StemMatch::LongestPrefix => candidates
                .fold(None, |best: Option<(usize, (&str, i8))>, (len, entry)| match best {
                    Some((best_len, _)) if best_len >= len => best,
                    _ => Some((len, entry)),
                })
                .map(|(_, entry)| entry),
        };

        prefix.map(|(canonical, score)| Resolved {
            canonical,
            score,
            via: Resolution::Prefix,
        })
    }

    /// Rarity weight of `word`, 1.0 when absent
    pub fn rarity_weight(&self, word: &str) -> f64 {
        self.rarity.get(word).copied().unwrap_or(DEFAULT_RARITY)
    }

    /// Check table invariants.
    ///
    /// Polarity must be one of -2, -1, 1, 2 and rarity weights positive and
    /// finite. Stems pointing at missing entries are only reported, since
    /// lookups skip them.
    pub fn validate(&self) -> Result<()> {
        for (word, score) in &self.polarity {
            check_polarity(word, *score)?;
        }
        for (word, weight) in &self.rarity {
            check_rarity(word, *weight)?;
        }
        for (stem, canonical) in &self.stems {
            if stem.is_empty() {
                return Err(MoodError::InvalidLexicon(format!(
                    "empty stem mapped to '{canonical}'"
                )));
            }
            if !self.polarity.contains_key(canonical) {
                warn!(stem = %stem, canonical = %canonical, "stem maps to a word missing from the lexicon");
            }
        }
        Ok(())
    }

    fn entry(&self, word: &str) -> Option<(&str, i8)> {
        self.polarity
            .get_key_value(word)
            .map(|(canonical, score)| (canonical.as_str(), *score))
    }
}

fn check_polarity(word: &str, score: i8) -> Result<()> {
    if matches!(score, -2 | -1 | 1 | 2) {
        Ok(())
    } else {
        Err(MoodError::InvalidLexicon(format!(
            "polarity of '{word}' must be -2, -1, 1 or 2, got {score}"
        )))
    }
}

fn check_rarity(word: &str, weight: f64) -> Result<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(MoodError::InvalidLexicon(format!(
            "rarity weight of '{word}' must be positive, got {weight}"
        )))
    }
}
