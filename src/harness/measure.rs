//! Timing and memory measurement around a single engine run

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use super::HarnessError;
use crate::batch::Strategy;
use crate::dataset::CsvValues;
use crate::streaming::{DequeMovingAverage, RingMovingAverage};
use crate::traits::{WindowAccumulator, WindowError};

/// Label used for the one-pass CSV streaming scenario
pub const CSV_STREAM_LABEL: &str = "csv-stream";

/// What one engine run cost and produced
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Measurement {
    /// Strategy name, or [`CSV_STREAM_LABEL`]
    pub label: String,
    /// Window length
    pub period: usize,
    /// Values consumed
    pub inputs: usize,
    /// Averages produced
    pub outputs: usize,
    /// Last average produced
    pub last: Option<f64>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
    /// Heap held by the output vector
    pub output_bytes: usize,
    /// State held by a streaming accumulator, independent of `inputs`
    pub state_bytes: Option<usize>,
    /// Resident set size of the process after the run
    pub rss_bytes: Option<usize>,
}

impl Measurement {
    fn new(label: impl Into<String>, period: usize, inputs: usize, averages: &[f64]) -> Self {
        Self {
            label: label.into(),
            period,
            inputs,
            outputs: averages.len(),
            last: averages.last().copied(),
            elapsed: Duration::ZERO,
            output_bytes: core::mem::size_of_val(averages),
            state_bytes: None,
            rss_bytes: process_rss(),
        }
    }

    fn log(&self) {
        tracing::info!(
            label = %self.label,
            period = self.period,
            inputs = self.inputs,
            outputs = self.outputs,
            elapsed_s = self.elapsed.as_secs_f64(),
            rss_mb = self.rss_bytes.map(megabytes),
            "measured"
        );
    }
}

fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / 1e6
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "engine          : {}", self.label)?;
        writeln!(f, "window length   : {}", self.period)?;
        match self.last {
            Some(last) => writeln!(f, "last average    : {:?}", last)?,
            None => writeln!(f, "last average    : (window never filled)")?,
        }
        writeln!(f, "averages        : {} of {} values", self.outputs, self.inputs)?;
        writeln!(f, "elapsed         : {:.9} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "output memory   : {:.3} MB", megabytes(self.output_bytes))?;
        if let Some(state) = self.state_bytes {
            writeln!(f, "engine state    : {} bytes", state)?;
        }
        match self.rss_bytes {
            Some(rss) => write!(f, "process memory  : {:.3} MB", megabytes(rss)),
            None => write!(f, "process memory  : unavailable"),
        }
    }
}

/// Resident set size of the current process, when the platform reports it
pub fn process_rss() -> Option<usize> {
    memory_stats::memory_stats().map(|stats| stats.physical_mem)
}

/// Run `f` and return its result with the elapsed wall-clock time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

/// State a streaming strategy holds for a window of `period` values
pub fn state_bytes(strategy: Strategy, period: usize) -> Option<usize> {
    match strategy {
        Strategy::StreamingRing => RingMovingAverage::<f64>::try_new(period)
            .ok()
            .map(|ma| ma.size_bytes()),
        Strategy::StreamingDeque => DequeMovingAverage::<f64>::try_new(period)
            .ok()
            .map(|ma| ma.size_bytes()),
        Strategy::Naive | Strategy::NaiveLanes | Strategy::Online => None,
    }
}

/// Run one strategy over in-memory values
///
/// Fails before measuring anything if the window does not fit the data.
pub fn measure(
    strategy: Strategy,
    values: &[f64],
    period: usize,
) -> Result<(Vec<f64>, Measurement), WindowError> {
    let (averages, elapsed) = timed(|| strategy.compute(values, period));
    let averages = averages?;

    let mut measurement = Measurement::new(strategy.name(), period, values.len(), &averages);
    measurement.elapsed = elapsed;
    measurement.state_bytes = state_bytes(strategy, period);
    measurement.log();
    Ok((averages, measurement))
}

/// Read, parse and average a CSV dataset in one pass
///
/// Only the ring buffer and the output vector are held in memory; the input
/// is never materialised. The elapsed time covers reading and parsing. If
/// the file holds fewer than `period` values no averages are produced.
pub fn measure_csv_stream(
    path: impl AsRef<Path>,
    period: usize,
) -> Result<(Vec<f64>, Measurement), HarnessError> {
    let path = path.as_ref();
    let started = Instant::now();

    let mut accumulator = RingMovingAverage::try_new(period)?;
    let mut averages = Vec::new();
    for value in CsvValues::open(path)? {
        if let Some(average) = accumulator.update(value?) {
            averages.push(average);
        }
    }
    let elapsed = started.elapsed();

    let inputs = accumulator.count() as usize;
    let mut measurement = Measurement::new(CSV_STREAM_LABEL, period, inputs, &averages);
    measurement.elapsed = elapsed;
    measurement.state_bytes = Some(accumulator.size_bytes());
    tracing::debug!(path = %path.display(), inputs, "streamed dataset");
    measurement.log();
    Ok((averages, measurement))
}
