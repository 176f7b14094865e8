//! # Context Rules
//!
//! Negation, intensifier, weakener and transition handling around a
//! sentiment token.

use super::korean;
use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Trigger word lists
///
/// Negators, strong intensifiers, mild intensifiers and weakeners must be
/// pairwise disjoint; [`ContextLists::validate`] checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLists {
    pub negators: HashSet<String>,
    pub strong_intensifiers: HashSet<String>,
    pub mild_intensifiers: HashSet<String>,
    pub weakeners: HashSet<String>,
    /// Contrastive conjunctions
    pub transitions: HashSet<String>,
    /// Polarity words a negator never inverts
    pub no_negation_flip: HashSet<String>,
}

impl Default for ContextLists {
    fn default() -> Self {
        Self::korean()
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl ContextLists {
    /// Built-in Korean trigger lists
    pub fn korean() -> Self {
        Self {
            negators: to_set(korean::NEGATORS),
            strong_intensifiers: to_set(korean::STRONG_INTENSIFIERS),
            mild_intensifiers: to_set(korean::MILD_INTENSIFIERS),
            weakeners: to_set(korean::WEAKENERS),
            transitions: to_set(korean::TRANSITIONS),
            no_negation_flip: to_set(korean::NO_NEGATION_FLIP),
        }
    }

    /// Lists with no trigger words at all
    pub fn empty() -> Self {
        Self {
            negators: HashSet::new(),
            strong_intensifiers: HashSet::new(),
            mild_intensifiers: HashSet::new(),
            weakeners: HashSet::new(),
            transitions: HashSet::new(),
            no_negation_flip: HashSet::new(),
        }
    }

    /// Load lists from a JSON, TOML or YAML file and validate them
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lists: Self = crate::config::load_structured(path)?;
        lists.validate()?;
        Ok(lists)
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn is_transition(&self, word: &str) -> bool {
        self.transitions.contains(word)
    }

    /// Whether a word fires any context rule
    pub fn is_trigger(&self, word: &str) -> bool {
        self.negators.contains(word)
            || self.strong_intensifiers.contains(word)
            || self.mild_intensifiers.contains(word)
            || self.weakeners.contains(word)
            || self.transitions.contains(word)
    }

    /// Every word in every list
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.negators
            .iter()
            .chain(&self.strong_intensifiers)
            .chain(&self.mild_intensifiers)
            .chain(&self.weakeners)
            .chain(&self.transitions)
            .chain(&self.no_negation_flip)
            .map(String::as_str)
    }

    /// Check that the four modifier lists are pairwise disjoint
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("negators", &self.negators),
            ("strong_intensifiers", &self.strong_intensifiers),
            ("mild_intensifiers", &self.mild_intensifiers),
            ("weakeners", &self.weakeners),
        ];
        for (i, (name_a, a)) in lists.iter().enumerate() {
            for (name_b, b) in &lists[i + 1..] {
                if let Some(word) = a.intersection(b).next() {
                    return Err(MoodError::InvalidLexicon(format!(
                        "'{word}' appears in both {name_a} and {name_b}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Intensifier strength applied to one token. Strong dominates mild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensifierTier {
    #[default]
    None,
    Mild,
    Strong,
}

/// Rules that fired for one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextFlags {
    pub negated: bool,
    pub intensifier: IntensifierTier,
    pub weakened: bool,
    /// A transition marker occurs anywhere before the token
    pub post_transition: bool,
}

/// Facts computed once per document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentContext {
    /// Any negator anywhere in the document
    pub negated: bool,
    /// Index of the first transition marker
    pub first_transition: Option<usize>,
}

impl DocumentContext {
    pub fn has_transition(&self) -> bool {
        self.first_transition.is_some()
    }
}

/// Context rule engine over a borrowed set of lists
#[derive(Debug, Clone, Copy)]
pub struct ContextRules<'a> {
    lists: &'a ContextLists,
    /// Tokens examined on each side
    window: usize,
}

impl<'a> ContextRules<'a> {
    pub fn new(lists: &'a ContextLists, window: usize) -> Self {
        Self { lists, window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Scan the whole document once
    pub fn document<S: AsRef<str>>(&self, tokens: &[S]) -> DocumentContext {
        DocumentContext {
            negated: tokens.iter().any(|t| self.lists.is_negator(t.as_ref())),
            first_transition: tokens
                .iter()
                .position(|t| self.lists.is_transition(t.as_ref())),
        }
    }

    /// Up to `window` tokens before and after `index`, excluding it
    pub fn window_at<'t, S: AsRef<str>>(
        &self,
        tokens: &'t [S],
        index: usize,
    ) -> impl Iterator<Item = &'t str> {
        let len = tokens.len();
        let index = index.min(len);
        let start = index.saturating_sub(self.window);
        let end = len.min(index.saturating_add(1).saturating_add(self.window));
        let before = &tokens[start..index];
        let after = tokens.get(index + 1..end).unwrap_or(&[]);
        before.iter().chain(after).map(|t| t.as_ref())
    }

    /// Flags for the token at `index`.
    ///
    /// `canonical` is the lexicon entry the token resolved to; the
    /// no-negation-flip list is checked against both forms.
    pub fn flags<S: AsRef<str>>(
        &self,
        tokens: &[S],
        index: usize,
        canonical: &str,
        document: &DocumentContext,
    ) -> ContextFlags {
        let mut has_negator = false;
        let mut has_strong = false;
        let mut has_mild = false;
        let mut weakened = false;

        for word in self.window_at(tokens, index) {
            has_negator |= self.lists.negators.contains(word);
            has_strong |= self.lists.strong_intensifiers.contains(word);
            has_mild |= self.lists.mild_intensifiers.contains(word);
            weakened |= self.lists.weakeners.contains(word);
        }

        let token = tokens.get(index).map(|t| t.as_ref()).unwrap_or_default();
        let flip_exempt = self.lists.no_negation_flip.contains(token)
            || self.lists.no_negation_flip.contains(canonical);

        let intensifier = if has_strong {
            IntensifierTier::Strong
        } else if has_mild {
            IntensifierTier::Mild
        } else {
            IntensifierTier::None
        };

        ContextFlags {
            negated: has_negator && !flip_exempt,
            intensifier,
            weakened,
            post_transition: document.first_transition.is_some_and(|t| t < index),
        }
    }
}
