//! Core traits and errors shared by the moving-average engines
//!
//! Every engine validates its window against [`WindowError`] before doing any
//! work. Streaming engines additionally implement [`WindowAccumulator`], the
//! seam used by the iterator adapters and the harness.

use core::fmt::Debug;

use num_traits::{AsPrimitive, Num};

/// Precondition violation on a window computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The window length was zero
    #[error("window length must be at least 1")]
    ZeroPeriod,
    /// The window is longer than the available data
    #[error("window length {period} exceeds the {len} available values")]
    PeriodExceedsLength { period: usize, len: usize },
}

impl WindowError {
    /// Check the batch preconditions `1 <= period <= len`
    pub fn check(period: usize, len: usize) -> Result<(), WindowError> {
        if period == 0 {
            Err(WindowError::ZeroPeriod)
        } else if period > len {
            Err(WindowError::PeriodExceedsLength { period, len })
        } else {
            Ok(())
        }
    }
}

/// Number of averages a batch engine emits for `len` inputs
///
/// Returns `None` when the window does not fit.
pub fn output_len(period: usize, len: usize) -> Option<usize> {
    if period == 0 {
        None
    } else {
        (len + 1).checked_sub(period)
    }
}

/// Numeric value a streaming engine can average
///
/// Covers the primitive integers and floats. Sums are kept in the sample
/// type itself, so integer windows accumulate exactly; only the final
/// division happens in `f64`.
pub trait Sample: Num + AsPrimitive<f64> + Debug {}

impl<T> Sample for T where T: Num + AsPrimitive<f64> + Debug {}

/// A fixed-window accumulator that consumes values one at a time
///
/// Implementations hold state bounded by the window length and never by the
/// number of values consumed.
pub trait WindowAccumulator: Clone + Debug {
    /// The type of value being averaged
    type Item: Copy;

    /// Push one value and return the current window average once the
    /// window has filled
    ///
    /// `None` means "not ready yet"; it is never confused with an average
    /// of zero.
    fn update(&mut self, value: Self::Item) -> Option<f64>;

    /// Window length
    fn period(&self) -> usize;

    /// Number of values consumed since construction or the last clear
    fn count(&self) -> u64;

    /// Return to the freshly constructed state, keeping the window length
    fn clear(&mut self);

    /// Memory held by the accumulator in bytes
    fn size_bytes(&self) -> usize;

    /// Whether at least `period` values have been consumed
    fn is_ready(&self) -> bool {
        self.count() >= self.period() as u64
    }

    /// Whether nothing has been consumed yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert_eq!(WindowError::check(0, 10), Err(WindowError::ZeroPeriod));
        assert_eq!(
            WindowError::check(4, 3),
            Err(WindowError::PeriodExceedsLength { period: 4, len: 3 })
        );
        assert!(WindowError::check(3, 3).is_ok());
        assert!(WindowError::check(1, 1).is_ok());
    }

    #[test]
    fn test_output_len() {
        assert_eq!(output_len(3, 7), Some(5));
        assert_eq!(output_len(7, 7), Some(1));
        assert_eq!(output_len(8, 7), None);
        assert_eq!(output_len(0, 7), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        let err = WindowError::PeriodExceedsLength { period: 4, len: 3 };
        assert_eq!(err.to_string(), "window length 4 exceeds the 3 available values");
    }
}
