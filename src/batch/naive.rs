//! Re-summing batch moving average
//!
//! Every window is summed from scratch, O(N·P). This is the reference the
//! faster engines are checked against.

use crate::math;
use crate::traits::WindowError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Moving average that sums every window independently
///
/// Returns `values.len() - period + 1` averages; element `k` is the mean of
/// `values[k..k + period]`.
///
/// ```
/// use movavg::batch::naive;
///
/// let averages = naive(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 3).unwrap();
/// assert_eq!(averages, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn naive(values: &[f64], period: usize) -> Result<Vec<f64>, WindowError> {
    WindowError::check(period, values.len())?;
    let divisor = period as f64;
    Ok(values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / divisor)
        .collect())
}

/// [`naive`] with each window summed by [`math::lane_sum`]
///
/// Same complexity, but the independent partial sums vectorise, which makes
/// a large difference for long windows.
pub fn naive_lanes(values: &[f64], period: usize) -> Result<Vec<f64>, WindowError> {
    WindowError::check(period, values.len())?;
    let divisor = period as f64;
    Ok(values
        .windows(period)
        .map(|window| math::lane_sum(window) / divisor)
        .collect())
}
