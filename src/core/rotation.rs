//! Rotation key representation
//!
//! A Rotation is a validated shift amount in 1..=25. Shifts of 0 and 26 are the identity and
//! are never part of the search space.

use super::CrackError;
use std::fmt;

/// Smallest non-identity rotation
pub const MIN_ROTATION: u8 = 1;

/// Largest non-identity rotation
pub const MAX_ROTATION: u8 = 25;

/// A non-identity alphabet rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rotation(u8);

impl Rotation {
    /// Create a rotation, rejecting anything outside 1..=25
    ///
    /// # Errors
    /// Returns `CrackError::InvalidRotation` if `shift` is not in 1..=25.
    ///
    /// # Examples
    /// ```
    /// use caesar_entropy::core::Rotation;
    ///
    /// assert_eq!(Rotation::new(10).unwrap().value(), 10);
    /// assert!(Rotation::new(0).is_err());
    /// assert!(Rotation::new(26).is_err());
    /// ```
    pub fn new(shift: i64) -> Result<Self, CrackError> {
        match u8::try_from(shift) {
            Ok(value) if (MIN_ROTATION..=MAX_ROTATION).contains(&value) => Ok(Self(value)),
            _ => Err(CrackError::InvalidRotation(shift)),
        }
    }

    /// All rotations in increasing order, 1 through 25
    pub fn all() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator {
        (MIN_ROTATION..=MAX_ROTATION).map(Self)
    }

    /// The shift amount
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rotation that undoes this one, `(26 - r) mod 26`
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self(MAX_ROTATION + 1 - self.0)
    }
}

impl TryFrom<i64> for Rotation {
    type Error = CrackError;

    fn try_from(shift: i64) -> Result<Self, Self::Error> {
        Self::new(shift)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
