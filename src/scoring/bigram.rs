//! Letter-pair frequency scoring

use super::{EMPTY_SCORE, Scorer, letter_indices, relative_entropy};
use crate::frequency::{ALPHABET_LEN, ENGLISH_BIGRAMS, FrequencyTable};
use rustc_hash::FxHashMap;

/// Surprisal charged for a pair the reference table does not list
///
/// Larger than the surprisal of any listed pair, so an unlisted pair always costs more.
pub const MISSING_BIGRAM_PENALTY_BITS: f64 = 20.0;

/// Scores a text by the divergence of its letter-pair distribution from English
///
/// Pairs come from a sliding window of 2 over the letter-only, case-folded projection, so
/// they span word boundaries and punctuation.
#[derive(Debug, Clone, Copy)]
pub struct BigramScorer {
    table: &'static FrequencyTable,
}

impl BigramScorer {
    /// Create a scorer against a letter-pair table
    #[must_use]
    pub const fn new(table: &'static FrequencyTable) -> Self {
        Self { table }
    }

    /// Count each ordered letter pair
    ///
    /// Keys are pair indices (`first * 26 + second`). Returns the counts and the total
    /// number of pairs.
    #[must_use]
    pub fn pair_counts(text: &str) -> (FxHashMap<usize, usize>, usize) {
        let letters: Vec<usize> = letter_indices(text).collect();
        let mut counts = FxHashMap::default();

        for window in letters.windows(2) {
            *counts
                .entry(window[0] * ALPHABET_LEN + window[1])
                .or_insert(0) += 1;
        }

        let total = letters.len().saturating_sub(1);
        (counts, total)
    }

    fn surprisal(&self, pair: usize) -> f64 {
        self.table
            .get(pair)
            .map_or(MISSING_BIGRAM_PENALTY_BITS, |q| -q.log2())
    }
}

impl Default for BigramScorer {
    fn default() -> Self {
        Self::new(&ENGLISH_BIGRAMS)
    }
}

impl Scorer for BigramScorer {
    /// Relative entropy of the observed pair distribution, in bits
    ///
    /// Fewer than two letters gives [`EMPTY_SCORE`].
    ///
    /// # Examples
    /// ```
    /// use caesar_entropy::scoring::{BigramScorer, Scorer};
    ///
    /// let scorer = BigramScorer::default();
    /// assert!(scorer.score("the other") < scorer.score("qzj xvk"));
    /// ```
    fn score(&self, text: &str) -> f64 {
        let (counts, total) = Self::pair_counts(text);
        if total == 0 {
            return EMPTY_SCORE;
        }

        relative_entropy(counts, total, |pair| self.surprisal(pair))
    }
}
