//! Delta-update batch moving average
//!
//! Sums the first window once, then slides it by adding the entering value
//! and subtracting the leaving one. Sums are accumulated in full and divided
//! by the window length in a separate final pass.

use crate::traits::WindowError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Moving average by running-sum deltas, O(N)
///
/// Same output contract as [`naive`](super::naive); results agree within
/// floating-point tolerance since the summation order differs.
///
/// ```
/// use movavg::batch::online;
///
/// let averages = online(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
/// assert_eq!(averages, vec![1.5, 2.5, 3.5, 4.5]);
/// ```
pub fn online(values: &[f64], period: usize) -> Result<Vec<f64>, WindowError> {
    WindowError::check(period, values.len())?;

    let mut sums = Vec::with_capacity(values.len() - period + 1);
    let mut sum: f64 = values[..period].iter().sum();
    sums.push(sum);
    for (entering, leaving) in values[period..].iter().zip(values) {
        sum += entering - leaving;
        sums.push(sum);
    }

    // divide last
    let divisor = period as f64;
    for sum in &mut sums {
        *sum /= divisor;
    }
    Ok(sums)
}
