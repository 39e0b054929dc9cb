//! English frequency tables
//!
//! Provides the reference letter and letter-pair distributions compiled into the binary
//! for zero-cost access.

mod embedded;
mod table;

pub use embedded::{BIGRAM_FREQUENCIES, LETTER_FREQUENCIES};
pub use table::{ALPHABET_LEN, ENGLISH_BIGRAMS, ENGLISH_LETTERS, FrequencyTable, symbol_index};
