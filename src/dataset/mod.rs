//! Input datasets for the benchmark scenarios
//!
//! Either a synthetic series generated in memory or a single-column CSV file
//! with a header row.
//!
//! # Example
//!
//! ```
//! use movavg::dataset;
//!
//! let values = dataset::generate(10);
//! let mut csv = Vec::new();
//! dataset::write_values(&mut csv, &values).unwrap();
//!
//! assert_eq!(dataset::read_values(csv.as_slice()).unwrap(), values);
//! ```

mod file;
mod synthetic;

pub use file::{read_csv, read_values, write_csv, write_values, CsvValues, VALUE_COLUMN};
pub use synthetic::{generate, series, value_at};

use std::path::PathBuf;

/// Failure to read or write a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened
    #[error("cannot open dataset {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A record did not hold a single number
    #[error("invalid record{}", .line.map(|l| format!(" on line {}", l)).unwrap_or_default())]
    Record {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },
    /// Any other CSV failure
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// I/O failure outside the CSV layer
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    pub(crate) fn from_record(source: csv::Error) -> Self {
        let line = source.position().map(|pos| pos.line());
        DatasetError::Record { line, source }
    }
}
