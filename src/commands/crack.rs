//! Crack command
//!
//! Validates caller input and ranks candidate plaintexts for every message.

use crate::analysis::{RankOptions, Ranker, ResultSet};
use crate::core::{Candidate, CrackError, MAX_ROTATION, MIN_ROTATION};
use crate::scoring::ScoringModel;

/// Configuration for cracking one or more ciphertexts
#[derive(Debug, Clone)]
pub struct CrackConfig {
    pub messages: Vec<String>,
    /// Candidates to return per message, 1..=25
    pub return_count: usize,
    /// Remove whitespace before rotating
    pub strip: bool,
    /// Score with letter pairs instead of single letters
    pub bigrams: bool,
}

impl CrackConfig {
    /// Defaults: one candidate, no stripping, unigram scoring
    #[must_use]
    pub const fn new(messages: Vec<String>) -> Self {
        Self {
            messages,
            return_count: 1,
            strip: false,
            bigrams: false,
        }
    }
}

/// Ranked candidates for every input message, in input order
pub struct CrackResult {
    pub result_sets: Vec<ResultSet>,
    pub model: ScoringModel,
}

impl CrackResult {
    /// All records, message by message
    pub fn records(&self) -> impl Iterator<Item = &Candidate> {
        self.result_sets.iter().flat_map(ResultSet::candidates)
    }
}

/// Check that a requested candidate count is in 1..=25
///
/// # Errors
/// Returns `CrackError::InvalidReturnCount` otherwise.
pub fn validate_return_count(return_count: usize) -> Result<usize, CrackError> {
    if (usize::from(MIN_ROTATION)..=usize::from(MAX_ROTATION)).contains(&return_count) {
        Ok(return_count)
    } else {
        Err(CrackError::InvalidReturnCount(return_count))
    }
}

/// Rank candidate plaintexts for every message in the config
///
/// # Errors
///
/// Returns `CrackError::InvalidReturnCount` if the return count is not in 1..=25. Nothing is
/// deciphered in that case.
///
/// # Examples
/// ```
/// use caesar_entropy::commands::{CrackConfig, crack_messages};
///
/// let mut config = CrackConfig::new(vec!["Ohkwzvo".to_string()]);
/// config.return_count = 6;
///
/// let result = crack_messages(&config).unwrap();
/// assert_eq!(result.records().count(), 6);
/// assert!(result.records().any(|c| c.plaintext() == "Example"));
/// ```
pub fn crack_messages(config: &CrackConfig) -> Result<CrackResult, CrackError> {
    let return_count = validate_return_count(config.return_count)?;

    let model = ScoringModel::from_bigrams(config.bigrams);
    let options = RankOptions::new(return_count, model).with_strip_whitespace(config.strip);
    let ranker = Ranker::new(options);

    tracing::debug!(
        messages = config.messages.len(),
        return_count,
        strip = config.strip,
        model = model.name(),
        "cracking messages"
    );

    Ok(CrackResult {
        result_sets: ranker.rank_batch(&config.messages),
        model,
    })
}
