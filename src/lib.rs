//! # movavg
//!
//! Moving averages over ordered numeric sequences, computed in batch or as a
//! stream, plus a harness that times the engines against each other.
//!
//! ## Engines
//!
//! - **Naive batch**: re-sums every window, O(N·P). The reference.
//! - **Online batch**: slides a running sum, O(N), dividing only after all
//!   window sums are known.
//! - **Streaming**: a ring buffer of P slots and a running sum. O(1) per
//!   value and O(P) memory however long the stream runs.
//!
//! "Not ready yet" is always `None`, never a NaN or a zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use movavg::prelude::*;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! // whole sequence at once
//! assert_eq!(online(&values, 3).unwrap(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! // one value at a time
//! let mut ma = RingMovingAverage::new(2);
//! assert_eq!(ma.update(10.0), None);
//! assert_eq!(ma.update(20.0), Some(15.0));
//! assert_eq!(ma.update(30.0), Some(25.0));
//! ```
//!
//! ## Feature Flags
//!
//! Engine families:
//! - `streaming` (default): ring and deque accumulators, iterator adapters
//! - `batch` (default): naive and online batch engines, [`Strategy`](batch::Strategy)
//!
//! Tooling:
//! - `harness` (default): CSV datasets, measurement and comparison
//! - `cli`: the `movavg-bench` binary
//! - `full`: everything
//!
//! Platform features:
//! - `std` (default): Standard library support; the engines also build
//!   without it
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod math;
pub mod traits;

#[cfg(feature = "streaming")]
#[cfg_attr(docsrs, doc(cfg(feature = "streaming")))]
pub mod streaming;

#[cfg(feature = "batch")]
#[cfg_attr(docsrs, doc(cfg(feature = "batch")))]
pub mod batch;

#[cfg(feature = "harness")]
#[cfg_attr(docsrs, doc(cfg(feature = "harness")))]
pub mod dataset;

#[cfg(feature = "harness")]
#[cfg_attr(docsrs, doc(cfg(feature = "harness")))]
pub mod harness;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "streaming")]
    pub use crate::streaming::{DequeMovingAverage, MovingAverageExt, RingMovingAverage};

    #[cfg(feature = "batch")]
    pub use crate::batch::{aligned, naive, naive_lanes, online, Strategy};
}

#[cfg(feature = "streaming")]
pub use streaming::RingMovingAverage;

#[cfg(feature = "batch")]
pub use batch::Strategy;
