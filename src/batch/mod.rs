//! Batch moving averages
//!
//! Engines that take the whole sequence up front and return every window
//! average at once. All of them reject a window longer than the data before
//! doing any work.
//!
//! - [`naive`]: re-sums each window (the reference)
//! - [`naive_lanes`]: re-sums each window with lane-parallel partial sums
//! - [`online`]: slides a running sum, dividing once all sums are known
//!
//! [`Strategy`] names every engine, batch and streaming, so callers can pick
//! one at run time.
//!
//! # Example
//!
//! ```
//! use movavg::batch::{self, Strategy};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! assert_eq!(batch::online(&values, 3).unwrap(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.compute(&values, 7).unwrap(), vec![4.0]);
//! }
//! ```

mod naive;
mod online;

pub use naive::{naive, naive_lanes};
pub use online::online;

use core::fmt;
use core::str::FromStr;

use crate::streaming::{DequeMovingAverage, MovingAverageExt, Ready, RingMovingAverage};
use crate::traits::{Sample, WindowError};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// A moving-average engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// [`naive`]
    Naive,
    /// [`naive_lanes`]
    NaiveLanes,
    /// [`online`]
    Online,
    /// [`RingMovingAverage`] fed one value at a time
    StreamingRing,
    /// [`DequeMovingAverage`] fed one value at a time
    StreamingDeque,
}

impl Strategy {
    /// Every strategy, reference first
    pub const ALL: [Strategy; 5] = [
        Strategy::Naive,
        Strategy::NaiveLanes,
        Strategy::Online,
        Strategy::StreamingRing,
        Strategy::StreamingDeque,
    ];

    /// Kebab-case name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::NaiveLanes => "naive-lanes",
            Strategy::Online => "online",
            Strategy::StreamingRing => "streaming-ring",
            Strategy::StreamingDeque => "streaming-deque",
        }
    }

    /// Whether the strategy consumes values one at a time
    pub fn is_streaming(self) -> bool {
        matches!(self, Strategy::StreamingRing | Strategy::StreamingDeque)
    }

    /// Compute the `values.len() - period + 1` window averages
    ///
    /// Streaming strategies are held to the batch preconditions too, so
    /// every strategy fails the same way on the same input.
    pub fn compute(self, values: &[f64], period: usize) -> Result<Vec<f64>, WindowError> {
        match self {
            Strategy::Naive => naive(values, period),
            Strategy::NaiveLanes => naive_lanes(values, period),
            Strategy::Online => online(values, period),
            Strategy::StreamingRing => {
                WindowError::check(period, values.len())?;
                Ok(values.iter().copied().moving_averages(period).collect())
            }
            Strategy::StreamingDeque => {
                WindowError::check(period, values.len())?;
                let accumulator = DequeMovingAverage::new(period);
                Ok(Ready::new(values.iter().copied(), accumulator).collect())
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised strategy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{0}`, expected one of naive, naive-lanes, online, streaming-ring, streaming-deque")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ParseStrategyError(s.into()))
    }
}

/// Window averages aligned with the input
///
/// Returns one entry per value: `None` for the first `period - 1`, then the
/// average of the window ending at that index. A window longer than the data
/// is not an error here; every entry is simply `None`.
///
/// ```
/// use movavg::batch::aligned;
///
/// let out = aligned(&[10.0, 20.0, 30.0], 2).unwrap();
/// assert_eq!(out, vec![None, Some(15.0), Some(25.0)]);
/// ```
pub fn aligned<T: Sample>(values: &[T], period: usize) -> Result<Vec<Option<f64>>, WindowError> {
    let mut accumulator = RingMovingAverage::try_new(period)?;
    Ok(values.iter().map(|&value| accumulator.update(value)).collect())
}
