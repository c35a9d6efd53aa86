//! Deterministic synthetic time series

/// Value of the series at 1-based position `index`
///
/// A sawtooth that rises by one every seven steps with a weekly ripple
/// on top: `index / 7 + index % 7` in integer arithmetic. Every value is an
/// integer, so window sums stay exact in `f64` well past 10⁷ values.
#[inline]
pub fn value_at(index: u64) -> f64 {
    (index / 7 + index % 7) as f64
}

/// Iterator over the first `len` values of the series
pub fn series(len: usize) -> impl ExactSizeIterator<Item = f64> {
    (0..len).map(|i| value_at(i as u64 + 1))
}

/// The first `len` values of the series, collected
pub fn generate(len: usize) -> Vec<f64> {
    tracing::debug!(len, "generating synthetic series");
    series(len).collect()
}
