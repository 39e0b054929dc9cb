//! Alphabet rotation transform
//!
//! Only ASCII letters are rotated. Everything else, including non-ASCII letters, passes
//! through untouched so that positions and punctuation survive every rotation.

use super::Rotation;

const ALPHABET_LEN: u8 = 26;

/// Shift a single character forward by `shift` positions, preserving case
#[inline]
fn shift_char(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    // Both bytes are < 128 here, so the cast back to char is lossless
    let offset = (c as u8 - base + shift) % ALPHABET_LEN;
    char::from(base + offset)
}

/// Shift every letter backward through the alphabet by `rotation`
///
/// # Examples
/// ```
/// use caesar_entropy::core::{Rotation, decipher};
///
/// let rotation = Rotation::new(10).unwrap();
/// assert_eq!(decipher("Ohkwzvo!", rotation), "Example!");
/// ```
#[must_use]
pub fn decipher(text: &str, rotation: Rotation) -> String {
    let shift = rotation.inverse().value();
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Shift every letter forward through the alphabet by `rotation`
///
/// Inverse of [`decipher`] for the same rotation.
///
/// # Examples
/// ```
/// use caesar_entropy::core::{Rotation, encipher};
///
/// let rotation = Rotation::new(10).unwrap();
/// assert_eq!(encipher("Example!", rotation), "Ohkwzvo!");
/// ```
#[must_use]
pub fn encipher(text: &str, rotation: Rotation) -> String {
    let shift = rotation.value();
    text.chars().map(|c| shift_char(c, shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn rot(shift: i64) -> Rotation {
        Rotation::new(shift).unwrap()
    }

    fn random_printable(rng: &mut StdRng, len: usize) -> String {
        (0..len)
            .map(|_| char::from(rng.random_range(b' '..=b'~')))
            .collect()
    }

    #[test]
    fn decipher_long_sentence() {
        let plaintext = decipher("Drsc sc kx ohkwzvo drkd cryevn lo vyxq oxyeqr", rot(10));
        assert_eq!(plaintext, "This is an example that should be long enough");
    }

    #[test]
    fn decipher_wraps_around() {
        assert_eq!(decipher("abc", rot(1)), "zab");
        assert_eq!(decipher("ABC", rot(3)), "XYZ");
        assert_eq!(decipher("a", rot(25)), "b");
    }

    #[test]
    fn decipher_empty() {
        assert_eq!(decipher("", rot(5)), "");
    }

    #[test]
    fn decipher_no_letters_is_identity() {
        for rotation in Rotation::all() {
            assert_eq!(decipher("123 -- 4.5!?", rotation), "123 -- 4.5!?");
        }
    }

    #[test]
    fn non_ascii_letters_pass_through() {
        assert_eq!(decipher("café", rot(1)), "bzeé");
    }

    #[test]
    fn encipher_is_inverse_of_decipher() {
        let ciphertext = "Drsc sc kx ohkwzvo drkd cryevn lo vyxq oxyeqr";
        for rotation in Rotation::all() {
            assert_eq!(encipher(&decipher(ciphertext, rotation), rotation), ciphertext);
        }
    }

    #[test]
    fn round_trip_random_printable() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let text = random_printable(&mut rng, len);
            for rotation in Rotation::all() {
                let once = decipher(&text, rotation);
                assert_eq!(decipher(&once, rotation.inverse()), text);
            }
        }
    }

    #[test]
    fn non_letters_keep_position_and_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let text = random_printable(&mut rng, 256);
        for rotation in Rotation::all() {
            let rotated = decipher(&text, rotation);
            for (before, after) in text.chars().zip(rotated.chars()) {
                if !before.is_ascii_alphabetic() {
                    assert_eq!(before, after);
                }
            }
        }
    }

    #[test]
    fn case_is_preserved() {
        let text = "The Quick Brown FOX jumps over the lazy dog";
        for rotation in Rotation::all() {
            let rotated = decipher(text, rotation);
            for (before, after) in text.chars().zip(rotated.chars()) {
                assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
                assert_eq!(before.is_ascii_lowercase(), after.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn every_rotation_changes_every_letter() {
        for rotation in Rotation::all() {
            let rotated = decipher("abcdefghijklmnopqrstuvwxyz", rotation);
            assert!(
                rotated
                    .chars()
                    .zip("abcdefghijklmnopqrstuvwxyz".chars())
                    .all(|(a, b)| a != b)
            );
        }
    }
}
