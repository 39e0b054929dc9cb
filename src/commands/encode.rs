//! Encode command
//!
//! Enciphers a plaintext, producing input for the crack command.

use crate::core::{CrackError, Rotation, encipher};

/// Encipher `text` by shifting every letter forward `rotation` places
///
/// # Errors
///
/// Returns `CrackError::InvalidRotation` if `rotation` is not in 1..=25.
///
/// # Examples
/// ```
/// use caesar_entropy::commands::encode_text;
///
/// assert_eq!(encode_text("Example", 10).unwrap(), "Ohkwzvo");
/// assert!(encode_text("Example", 0).is_err());
/// ```
pub fn encode_text(text: &str, rotation: i64) -> Result<String, CrackError> {
    let rotation = Rotation::new(rotation)?;
    Ok(encipher(text, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CrackConfig, crack_messages};

    #[test]
    fn encode_sentence() {
        let encoded = encode_text("This is an example that should be long enough", 10).unwrap();
        assert_eq!(encoded, "Drsc sc kx ohkwzvo drkd cryevn lo vyxq oxyeqr");
    }

    #[test]
    fn encode_rejects_out_of_range() {
        assert_eq!(encode_text("x", 26), Err(CrackError::InvalidRotation(26)));
        assert_eq!(encode_text("x", -1), Err(CrackError::InvalidRotation(-1)));
    }

    #[test]
    fn crack_recovers_encoded_text() {
        let plaintext = "Meet me at the old bridge after the concert tonight";
        for rotation in [1, 7, 13, 25] {
            let encoded = encode_text(plaintext, rotation).unwrap();
            let result = crack_messages(&CrackConfig::new(vec![encoded])).unwrap();
            let best = result.records().next().unwrap();

            assert_eq!(best.plaintext(), plaintext);
            assert_eq!(i64::from(best.rotation().value()), rotation);
        }
    }
}
