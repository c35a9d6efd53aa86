//! Streaming moving averages
//!
//! Accumulators that consume one value at a time with state bounded by the
//! window length, independent of how many values the stream holds.
//!
//! - [`RingMovingAverage`]: fixed ring buffer plus running sum, O(1) per update
//! - [`DequeMovingAverage`]: the same contract on a growable queue
//!
//! Both report "not ready" as `None` until `period` values have arrived.
//!
//! # Example
//!
//! ```
//! use movavg::streaming::{MovingAverageExt, RingMovingAverage};
//!
//! let mut ma = RingMovingAverage::new(3);
//! for value in [1.0, 2.0] {
//!     assert_eq!(ma.update(value), None);
//! }
//! assert_eq!(ma.update(3.0), Some(2.0));
//!
//! // or as an iterator adapter
//! let averages: Vec<f64> = [1.0, 2.0, 3.0, 4.0].into_iter().moving_averages(3).collect();
//! assert_eq!(averages, vec![2.0, 3.0]);
//! ```

mod deque;
mod iter;
mod ring;

pub use deque::DequeMovingAverage;
pub use iter::{Aligned, MovingAverageExt, Ready};
pub use ring::RingMovingAverage;
