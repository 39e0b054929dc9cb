//! Relative entropy between observed counts and an expected distribution

/// Score given to a text with nothing to count
///
/// No evidence means no divergence. Every rotation of such a text scores the same, so the
/// ranking falls back to rotation order.
pub const EMPTY_SCORE: f64 = 0.0;

/// Relative entropy D(P || Q) in bits
///
/// H = Σ p · (log₂ p − log₂ q)
///
/// `counts` yields `(symbol, count)` pairs of the observed distribution P, `total` is the
/// sum of all counts, and `surprisal` returns −log₂ q for a symbol of the expected
/// distribution Q.
///
/// # Properties
/// - Returns [`EMPTY_SCORE`] when `total` is zero
/// - Returns 0.0 when P equals Q
/// - Never negative when `surprisal` comes from a true distribution
///
/// # Examples
/// ```
/// use caesar_entropy::scoring::relative_entropy;
///
/// // Observed: two symbols, equally often. Expected: the same.
/// let counts = [(0, 5), (1, 5)];
/// let d = relative_entropy(counts, 10, |_| 1.0);
/// assert!(d.abs() < 1e-12);
/// ```
pub fn relative_entropy<I, F>(counts: I, total: usize, surprisal: F) -> f64
where
    I: IntoIterator<Item = (usize, usize)>,
    F: Fn(usize) -> f64,
{
    if total == 0 {
        return EMPTY_SCORE;
    }

    let total = total as f64;

    counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(symbol, count)| {
            let p = count as f64 / total;
            p * (p.log2() + surprisal(symbol))
        })
        .sum()
}
