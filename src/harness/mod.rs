//! Measurement and comparison harness
//!
//! Runs engines over the same input, records wall-clock time and process
//! memory around each run, and checks that every engine reproduces the
//! reference averages within a tolerance. A disagreement is an error: it
//! means one of the engines is wrong.
//!
//! # Example
//!
//! ```
//! use movavg::batch::Strategy;
//! use movavg::dataset;
//! use movavg::harness::{run_comparison, DEFAULT_TOLERANCE};
//!
//! let values = dataset::generate(10_000);
//! let comparison = run_comparison(&values, 7, &Strategy::ALL, DEFAULT_TOLERANCE).unwrap();
//!
//! for measurement in &comparison.measurements {
//!     println!("{}\n", measurement);
//! }
//! ```

mod compare;
mod measure;

pub use compare::{run_comparison, verify_agreement, Agreement, Comparison, DEFAULT_TOLERANCE};
pub use measure::{
    measure, measure_csv_stream, process_rss, state_bytes, timed, Measurement, CSV_STREAM_LABEL,
};

use crate::dataset::DatasetError;
use crate::traits::WindowError;

/// Failure of a harness run
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The window does not fit the data
    #[error(transparent)]
    Window(#[from] WindowError),
    /// The dataset could not be read
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// An engine produced the wrong number of averages
    #[error("{label} produced {found} averages, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
    /// An engine disagreed with the reference beyond the tolerance
    #[error("{label} disagrees with the reference at window {index}: expected {expected}, found {found} (tolerance {tolerance:e})")]
    ValueMismatch {
        label: String,
        index: usize,
        expected: f64,
        found: f64,
        tolerance: f64,
    },
}
