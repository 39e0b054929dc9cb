//! Scored candidate plaintext

use super::Rotation;
use std::fmt;

/// One rotation of a ciphertext together with its entropy score
///
/// Built once by the ranker and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    plaintext: String,
    ciphertext: String,
    rotation: Rotation,
    entropy: f64,
}

impl Candidate {
    /// Create a scored candidate
    ///
    /// `ciphertext` is the original, unmodified input even when whitespace was stripped
    /// before rotating.
    #[must_use]
    pub const fn new(
        plaintext: String,
        ciphertext: String,
        rotation: Rotation,
        entropy: f64,
    ) -> Self {
        Self {
            plaintext,
            ciphertext,
            rotation,
            entropy,
        }
    }

    /// The deciphered text
    #[inline]
    #[must_use]
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    /// The input this candidate was derived from
    #[inline]
    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    #[inline]
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Divergence from English, lower is more plausible
    #[inline]
    #[must_use]
    pub const fn entropy(&self) -> f64 {
        self.entropy
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{:.6}",
            self.plaintext, self.ciphertext, self.rotation, self.entropy
        )
    }
}
