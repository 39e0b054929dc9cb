//! Candidate ranking
//!
//! Tries every rotation of a ciphertext, scores each plaintext and keeps the most
//! English-like ones.

mod ranker;
mod result_set;

pub use ranker::{RankOptions, Ranker, strip_whitespace};
pub use result_set::ResultSet;
