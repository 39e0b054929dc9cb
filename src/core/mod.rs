//! Core domain types for rotation ciphers
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidate;
mod cipher;
mod error;
mod rotation;

pub use candidate::Candidate;
pub use cipher::{decipher, encipher};
pub use error::CrackError;
pub use rotation::{MAX_ROTATION, MIN_ROTATION, Rotation};
