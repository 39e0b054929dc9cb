//! Error types for invalid arguments

use std::fmt;

/// Errors raised when an argument falls outside its valid domain
///
/// Every variant is raised before any deciphering takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrackError {
    /// Rotation is not in 1..=25
    InvalidRotation(i64),
    /// Requested number of candidates is not in 1..=25
    InvalidReturnCount(usize),
}

impl fmt::Display for CrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotation(rotation) => {
                write!(f, "Rotation must be between 1 and 25, got {rotation}")
            }
            Self::InvalidReturnCount(count) => {
                write!(f, "Return count must be between 1 and 25, got {count}")
            }
        }
    }
}

impl std::error::Error for CrackError {}
