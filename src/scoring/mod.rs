//! Language-model scoring of candidate plaintexts
//!
//! Scores are relative entropies (Kullback-Leibler divergence, in bits) of the observed
//! letter or letter-pair distribution from the expected English distribution. Lower means
//! more English-like.
//!
//! Short texts carry little evidence, so their scores are noisy: a seven-letter word will
//! often lose to a nonsense rotation that happens to use common letters. That is a
//! limitation of the model, not an error.

mod bigram;
mod divergence;
mod model;
mod unigram;

pub use bigram::{BigramScorer, MISSING_BIGRAM_PENALTY_BITS};
pub use divergence::{EMPTY_SCORE, relative_entropy};
pub use model::ScoringModel;
pub use unigram::UnigramScorer;

/// Something that measures how far a text is from natural English
///
/// Implementations must be deterministic: the same text always yields the same score.
pub trait Scorer {
    /// Score a candidate plaintext, lower is more natural
    fn score(&self, text: &str) -> f64;
}

/// Letter-only, case-folded projection of a text as alphabet indices 0..26
///
/// Non-letters (including non-ASCII letters) are skipped.
pub fn letter_indices(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| usize::from(b.to_ascii_uppercase() - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_indices_fold_case_and_skip_non_letters() {
        let indices: Vec<usize> = letter_indices("aZ 9-b!é").collect();
        assert_eq!(indices, vec![0, 25, 1]);
    }

    #[test]
    fn letter_indices_empty() {
        assert_eq!(letter_indices("").count(), 0);
        assert_eq!(letter_indices("1234 ,.;").count(), 0);
    }
}
