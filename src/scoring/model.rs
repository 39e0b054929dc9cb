//! Runtime selection between scoring models
//!
//! Allows runtime selection of the model while maintaining static dispatch.

use super::{BigramScorer, Scorer, UnigramScorer};
use std::fmt;

/// Enum wrapper for all scoring models
#[derive(Debug, Clone, Copy)]
pub enum ScoringModel {
    /// Single-letter frequencies (default)
    Unigram(UnigramScorer),
    /// Adjacent letter-pair frequencies
    Bigram(BigramScorer),
}

impl ScoringModel {
    /// Pick the English bigram model when `bigrams` is set, the unigram model otherwise
    #[must_use]
    pub fn from_bigrams(bigrams: bool) -> Self {
        if bigrams {
            Self::Bigram(BigramScorer::default())
        } else {
            Self::Unigram(UnigramScorer::default())
        }
    }

    /// Short model name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unigram(_) => "unigram",
            Self::Bigram(_) => "bigram",
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::from_bigrams(false)
    }
}

impl Scorer for ScoringModel {
    fn score(&self, text: &str) -> f64 {
        match self {
            Self::Unigram(s) => s.score(text),
            Self::Bigram(s) => s.score(text),
        }
    }
}

impl fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
