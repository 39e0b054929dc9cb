//! Read-only view over an embedded frequency table

use super::{BIGRAM_FREQUENCIES, LETTER_FREQUENCIES};

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Expected English single-letter distribution
pub static ENGLISH_LETTERS: FrequencyTable = FrequencyTable::new(&LETTER_FREQUENCIES, 1);

/// Expected English letter-pair distribution
pub static ENGLISH_BIGRAMS: FrequencyTable = FrequencyTable::new(&BIGRAM_FREQUENCIES, 2);

/// Flat table index of a symbol made of uppercase letters
///
/// Letters are read as base-26 digits, so `b"A"` is 0, `b"Z"` is 25 and `b"TH"` is
/// `19 * 26 + 7`.
///
/// # Panics
/// Panics if any byte is not an uppercase ASCII letter.
///
/// # Examples
/// ```
/// use caesar_entropy::frequency::symbol_index;
///
/// assert_eq!(symbol_index(b"E"), 4);
/// assert_eq!(symbol_index(b"AB"), 1);
/// ```
#[must_use]
pub fn symbol_index(symbol: &[u8]) -> usize {
    symbol.iter().fold(0, |acc, &b| {
        assert!(b.is_ascii_uppercase(), "symbol byte {b} is not A-Z");
        acc * ALPHABET_LEN + usize::from(b - b'A')
    })
}

/// Expected relative frequency for every symbol of a fixed width
///
/// Symbols are single letters (`order` 1) or ordered letter pairs (`order` 2), indexed by
/// [`symbol_index`]. A frequency of zero marks a symbol the table does not list.
#[derive(Debug)]
pub struct FrequencyTable {
    frequencies: &'static [f64],
    order: usize,
}

impl FrequencyTable {
    const fn new(frequencies: &'static [f64], order: usize) -> Self {
        Self { frequencies, order }
    }

    /// Symbol width in letters
    #[inline]
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Size of the symbol space (26 or 676)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Expected frequency of a symbol, or `None` if the table does not list it
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.frequencies.get(index).copied().filter(|&f| f > 0.0)
    }

    /// Number of symbols with a listed frequency
    #[must_use]
    pub fn listed(&self) -> usize {
        self.frequencies.iter().filter(|&&f| f > 0.0).count()
    }
}
