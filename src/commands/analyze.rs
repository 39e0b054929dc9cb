//! Text analysis command
//!
//! Scores a text as-is under both models, to judge how English-like it looks.

use crate::scoring::{BigramScorer, Scorer, UnigramScorer, letter_indices};

/// Result of analyzing a text
pub struct AnalysisResult {
    pub text: String,
    pub letters: usize,
    pub bigrams: usize,
    pub unigram_entropy: f64,
    pub bigram_entropy: f64,
}

/// Score a text against both English models without rotating it
///
/// # Examples
/// ```
/// use caesar_entropy::commands::analyze_text;
///
/// let result = analyze_text("Hello, world");
/// assert_eq!(result.letters, 10);
/// assert_eq!(result.bigrams, 9);
/// ```
#[must_use]
pub fn analyze_text(text: &str) -> AnalysisResult {
    let letters = letter_indices(text).count();

    AnalysisResult {
        text: text.to_string(),
        letters,
        bigrams: letters.saturating_sub(1),
        unigram_entropy: UnigramScorer::default().score(text),
        bigram_entropy: BigramScorer::default().score(text),
    }
}
