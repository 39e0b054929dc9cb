//! Brute-force rotation ranking

use super::ResultSet;
use crate::core::{Candidate, MAX_ROTATION, Rotation, decipher};
use crate::scoring::{Scorer, ScoringModel};
use rayon::prelude::*;

/// Options controlling a ranking run
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Number of candidates to keep per message (clamped to 25)
    pub return_count: usize,
    /// Scoring model used for every candidate
    pub model: ScoringModel,
    /// Remove all whitespace from the ciphertext before rotating
    pub strip_whitespace: bool,
}

impl RankOptions {
    /// Create options for the given count and model, without whitespace stripping
    #[must_use]
    pub const fn new(return_count: usize, model: ScoringModel) -> Self {
        Self {
            return_count,
            model,
            strip_whitespace: false,
        }
    }

    /// Enable or disable whitespace stripping
    #[must_use]
    pub const fn with_strip_whitespace(mut self, strip_whitespace: bool) -> Self {
        self.strip_whitespace = strip_whitespace;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::new(1, ScoringModel::default())
    }
}

/// Ranks every rotation of a ciphertext by entropy
///
/// Each message is ranked independently; nothing is shared between calls, so a ranker can
/// be used from many threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    options: RankOptions,
}

impl Ranker {
    /// Create a ranker with the given options
    ///
    /// The return count is not validated here. Counts above 25 are clamped when ranking.
    #[must_use]
    pub const fn new(options: RankOptions) -> Self {
        Self { options }
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &RankOptions {
        &self.options
    }

    /// Number of candidates a single ranking returns
    #[inline]
    #[must_use]
    pub fn effective_count(&self) -> usize {
        self.options.return_count.min(usize::from(MAX_ROTATION))
    }

    /// Rank all 25 rotations of `ciphertext`
    ///
    /// Returns `min(return_count, 25)` candidates in ascending entropy order. Equal scores
    /// keep rotation order.
    ///
    /// # Examples
    /// ```
    /// use caesar_entropy::analysis::{RankOptions, Ranker};
    /// use caesar_entropy::scoring::ScoringModel;
    ///
    /// let ranker = Ranker::new(RankOptions::new(1, ScoringModel::default()));
    /// let best = ranker.rank("Drsc sc kx ohkwzvo drkd cryevn lo vyxq oxyeqr");
    ///
    /// assert_eq!(best.len(), 1);
    /// assert_eq!(best[0].rotation().value(), 10);
    /// assert_eq!(best[0].plaintext(), "This is an example that should be long enough");
    /// ```
    #[must_use]
    pub fn rank(&self, ciphertext: &str) -> Vec<Candidate> {
        self.rank_rotations(ciphertext, &Rotation::all().collect::<Vec<_>>())
    }

    /// Rank only the given rotations of `ciphertext`
    ///
    /// Ties keep the order in which `rotations` lists them.
    #[must_use]
    pub fn rank_rotations(&self, ciphertext: &str, rotations: &[Rotation]) -> Vec<Candidate> {
        let stripped;
        let source = if self.options.strip_whitespace {
            stripped = strip_whitespace(ciphertext);
            stripped.as_str()
        } else {
            ciphertext
        };

        let model = self.options.model;

        // Indexed parallel collect keeps generation order
        let mut candidates: Vec<Candidate> = rotations
            .par_iter()
            .map(|&rotation| {
                let plaintext = decipher(source, rotation);
                let entropy = model.score(&plaintext);
                tracing::trace!(rotation = rotation.value(), entropy, "scored candidate");
                Candidate::new(plaintext, ciphertext.to_string(), rotation, entropy)
            })
            .collect();

        // Stable: equal scores stay in rotation order
        candidates.sort_by(|a, b| a.entropy().total_cmp(&b.entropy()));
        candidates.truncate(self.effective_count());

        tracing::debug!(
            model = model.name(),
            kept = candidates.len(),
            best_rotation = candidates.first().map(|c| c.rotation().value()),
            "ranked message"
        );

        candidates
    }

    /// Rank one message and keep it with its input
    #[must_use]
    pub fn rank_message(&self, ciphertext: &str) -> ResultSet {
        ResultSet::new(ciphertext.to_string(), self.rank(ciphertext))
    }

    /// Rank every message independently, preserving input order
    #[must_use]
    pub fn rank_batch<S>(&self, messages: &[S]) -> Vec<ResultSet>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<ResultSet> = messages
            .par_iter()
            .map(|message| self.rank_message(message.as_ref()))
            .collect();

        tracing::info!(messages = results.len(), "ranked batch");
        results
    }
}

/// Remove every whitespace character
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "Drsc sc kx ohkwzvo drkd cryevn lo vyxq oxyeqr";

    fn ranker(return_count: usize, bigrams: bool) -> Ranker {
        Ranker::new(RankOptions::new(
            return_count,
            ScoringModel::from_bigrams(bigrams),
        ))
    }

    #[test]
    fn short_word_correct_rotation_in_top_six() {
        let top = ranker(6, false).rank("Ohkwzvo");
        assert_eq!(top.len(), 6);

        let example = top.iter().find(|c| c.rotation().value() == 10).unwrap();
        assert_eq!(example.plaintext(), "Example");
        assert_eq!(example.ciphertext(), "Ohkwzvo");
    }

    #[test]
    fn short_word_beats_majority_of_rotations() {
        let all = ranker(25, false).rank("Ohkwzvo");
        let position = all.iter().position(|c| c.rotation().value() == 10).unwrap();

        // Lower than at least 13 of the other 24
        assert!(position <= 11, "rotation 10 ranked at {position}");
    }

    #[test]
    fn sentence_best_candidate_unigram_and_bigram() {
        for bigrams in [false, true] {
            let best = ranker(1, bigrams).rank(SENTENCE);
            assert_eq!(best.len(), 1);
            assert_eq!(best[0].rotation().value(), 10);
            assert_eq!(
                best[0].plaintext(),
                "This is an example that should be long enough"
            );
        }
    }

    #[test]
    fn entropy_is_non_decreasing() {
        for bigrams in [false, true] {
            let all = ranker(25, bigrams).rank(SENTENCE);
            assert!(all.windows(2).all(|w| w[0].entropy() <= w[1].entropy()));
        }
    }

    #[test]
    fn every_rotation_present_once() {
        let all = ranker(25, false).rank(SENTENCE);
        let mut rotations: Vec<u8> = all.iter().map(|c| c.rotation().value()).collect();
        rotations.sort_unstable();
        assert_eq!(rotations, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn returns_exactly_requested_count() {
        for k in 1..=25 {
            assert_eq!(ranker(k, false).rank(SENTENCE).len(), k);
        }
    }

    #[test]
    fn oversized_count_is_clamped() {
        let ranker = ranker(30, false);
        assert_eq!(ranker.effective_count(), 25);
        assert_eq!(ranker.rank(SENTENCE).len(), 25);
    }

    #[test]
    fn deterministic_output() {
        let ranker = ranker(25, true);
        assert_eq!(ranker.rank(SENTENCE), ranker.rank(SENTENCE));
    }

    #[test]
    fn strip_removes_whitespace_before_rotating() {
        let ranker = Ranker::new(
            RankOptions::new(25, ScoringModel::default()).with_strip_whitespace(true),
        );
        let all = ranker.rank(SENTENCE);

        assert!(all.iter().all(|c| !c.plaintext().contains(' ')));
        assert!(all.iter().all(|c| c.ciphertext() == SENTENCE));
        assert_eq!(all[0].plaintext(), "Thisisanexamplethatshouldbelongenough");
    }

    #[test]
    fn strip_whitespace_handles_tabs_and_newlines() {
        assert_eq!(strip_whitespace(" a\tb\nc  d\r\n"), "abcd");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn no_letters_yields_identical_candidates_in_rotation_order() {
        let all = ranker(25, false).rank("123 456 !?");

        assert_eq!(all.len(), 25);
        assert!(all.iter().all(|c| c.plaintext() == "123 456 !?"));
        assert!(all.iter().all(|c| c.entropy().is_finite()));

        let rotations: Vec<u8> = all.iter().map(|c| c.rotation().value()).collect();
        assert_eq!(rotations, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn empty_input_is_not_an_error() {
        for bigrams in [false, true] {
            let all = ranker(25, bigrams).rank("");
            assert_eq!(all.len(), 25);
            assert!(all.iter().all(|c| c.plaintext().is_empty()));
            assert_eq!(all[0].rotation().value(), 1);
            assert_eq!(all[24].rotation().value(), 25);
        }
    }

    #[test]
    fn rank_rotations_subset() {
        let rotations = [Rotation::new(3).unwrap(), Rotation::new(10).unwrap()];
        let ranked = ranker(25, false).rank_rotations(SENTENCE, &rotations);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rotation().value(), 10);
    }

    #[test]
    fn batch_preserves_input_order() {
        let messages = ["Ohkwzvo", SENTENCE, ""];
        let results = ranker(3, false).rank_batch(&messages);

        assert_eq!(results.len(), 3);
        for (result, message) in results.iter().zip(messages) {
            assert_eq!(result.ciphertext(), message);
            assert_eq!(result.len(), 3);
            assert!(result.candidates().iter().all(|c| c.ciphertext() == message));
        }
    }

    #[test]
    fn batch_matches_independent_ranking() {
        let ranker = ranker(5, true);
        let messages = vec![SENTENCE.to_string(), "Ohkwzvo".to_string()];
        let batch = ranker.rank_batch(&messages);

        for (result, message) in batch.iter().zip(&messages) {
            assert_eq!(result.candidates(), ranker.rank(message).as_slice());
        }
    }
}
