//! Single-letter frequency scoring

use super::{Scorer, letter_indices, relative_entropy};
use crate::frequency::{ALPHABET_LEN, ENGLISH_LETTERS, FrequencyTable};

/// Scores a text by the divergence of its letter distribution from English
#[derive(Debug, Clone, Copy)]
pub struct UnigramScorer {
    table: &'static FrequencyTable,
}

impl UnigramScorer {
    /// Create a scorer against a single-letter table
    #[must_use]
    pub const fn new(table: &'static FrequencyTable) -> Self {
        Self { table }
    }

    /// Count each letter A-Z, case-insensitively
    ///
    /// Returns the per-letter counts and the total number of letters.
    #[must_use]
    pub fn letter_counts(text: &str) -> ([usize; ALPHABET_LEN], usize) {
        let mut counts = [0; ALPHABET_LEN];
        let mut total = 0;

        for letter in letter_indices(text) {
            counts[letter] += 1;
            total += 1;
        }

        (counts, total)
    }
}

impl Default for UnigramScorer {
    fn default() -> Self {
        Self::new(&ENGLISH_LETTERS)
    }
}

impl Scorer for UnigramScorer {
    /// Relative entropy of the observed letter distribution, in bits
    ///
    /// # Examples
    /// ```
    /// use caesar_entropy::scoring::{Scorer, UnigramScorer};
    ///
    /// let scorer = UnigramScorer::default();
    /// assert!(scorer.score("the rain in spain") < scorer.score("qzx jvk wqq"));
    /// ```
    fn score(&self, text: &str) -> f64 {
        let (counts, total) = Self::letter_counts(text);

        // Every letter is listed, so the fallback is never hit for the English table
        relative_entropy(counts.into_iter().enumerate(), total, |letter| {
            self.table.get(letter).map_or(f64::INFINITY, |q| -q.log2())
        })
    }
}
