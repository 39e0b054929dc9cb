//! Ranked candidates for one ciphertext

use crate::core::Candidate;

/// The ranked candidates produced for a single input message
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    ciphertext: String,
    candidates: Vec<Candidate>,
}

impl ResultSet {
    /// Wrap already ranked candidates
    #[must_use]
    pub const fn new(ciphertext: String, candidates: Vec<Candidate>) -> Self {
        Self {
            ciphertext,
            candidates,
        }
    }

    /// The original input message
    #[inline]
    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Candidates in ascending entropy order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The most plausible candidate, if any was requested
    #[inline]
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Consume into the candidate list
    #[must_use]
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rotation;

    #[test]
    fn best_is_first() {
        let first = Candidate::new("b".into(), "c".into(), Rotation::new(1).unwrap(), 0.5);
        let second = Candidate::new("a".into(), "c".into(), Rotation::new(2).unwrap(), 0.9);
        let set = ResultSet::new("c".into(), vec![first.clone(), second]);

        assert_eq!(set.best(), Some(&first));
        assert_eq!(set.len(), 2);
        assert_eq!(set.ciphertext(), "c");
    }

    #[test]
    fn empty_set() {
        let set = ResultSet::new(String::new(), Vec::new());
        assert!(set.is_empty());
        assert!(set.best().is_none());
    }
}
