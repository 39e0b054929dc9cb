//! Caesar Entropy
//!
//! Ciphertext-only cracking of rotation (Caesar) ciphers. Every rotation is tried and scored
//! by how far its letter or letter-pair distribution diverges from English.
//!
//! # Quick Start
//!
//! ```rust
//! use caesar_entropy::analysis::{RankOptions, Ranker};
//! use caesar_entropy::scoring::ScoringModel;
//!
//! let ranker = Ranker::new(RankOptions::new(3, ScoringModel::from_bigrams(true)));
//! let candidates = ranker.rank("Ohkwzvo");
//!
//! assert_eq!(candidates[0].plaintext(), "Example");
//! println!("Rotation {} ({:.3} bits)", candidates[0].rotation(), candidates[0].entropy());
//! ```

// Core domain types
pub mod core;

// Reference language statistics
pub mod frequency;

// Scoring models
pub mod scoring;

// Rotation ranking
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
