//! Summation and comparison helpers
//!
//! Plain slice arithmetic with no allocation, usable without `std`.

/// Number of independent accumulators used by [`lane_sum`]
pub const LANES: usize = 16;

/// Sum a slice with [`LANES`] independent partial sums
///
/// Splitting the dependency chain lets the compiler vectorise the loop,
/// which pays off for long windows. The result can differ from a sequential
/// sum in the last bits because the addition order differs.
pub fn lane_sum(values: &[f64]) -> f64 {
    let chunks = values.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let lanes = chunks.fold([0.0f64; LANES], |mut acc, chunk| {
        for (lane, value) in acc.iter_mut().zip(chunk) {
            *lane += value;
        }
        acc
    });

    lanes.iter().sum::<f64>() + remainder.iter().sum::<f64>()
}

/// Largest absolute element-wise difference over the common prefix
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Sum of absolute element-wise differences over the common prefix
pub fn sum_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Whether `found` is within `tolerance` of `expected`
///
/// The tolerance is absolute for magnitudes below 1 and relative above.
#[inline]
pub fn approx_eq(expected: f64, found: f64, tolerance: f64) -> bool {
    (expected - found).abs() <= tolerance * expected.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_sum_matches_sequential() {
        for len in [0usize, 1, 15, 16, 17, 33, 100] {
            let values: [f64; 100] = core::array::from_fn(|i| i as f64 * 0.5);
            let slice = &values[..len];
            let expected: f64 = slice.iter().sum();
            assert!((lane_sum(slice) - expected).abs() < 1e-9, "len {}", len);
        }
    }

    #[test]
    fn test_diffs() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.5, 2.0];
        assert_eq!(max_abs_diff(&a, &b), 1.0);
        assert_eq!(sum_abs_diff(&a, &b), 1.5);
        assert_eq!(max_abs_diff(&a, &a), 0.0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.0, 1e-10, 1e-9));
        assert!(!approx_eq(0.0, 1e-8, 1e-9));
        // relative above 1
        assert!(approx_eq(1e6, 1e6 + 1e-4, 1e-9));
        assert!(!approx_eq(1e6, 1e6 + 1e-2, 1e-9));
    }
}
