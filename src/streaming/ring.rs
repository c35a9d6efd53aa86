//! Circular-buffer moving average
//!
//! Keeps the last `period` values in a fixed slice, overwriting the oldest
//! slot on every update, and maintains the window sum incrementally so each
//! update costs O(1) regardless of window length.

use crate::traits::{Sample, WindowAccumulator, WindowError};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

/// Streaming moving average over a fixed-capacity ring buffer
///
/// Holds exactly `period` slots, a cursor on the oldest slot, the running sum
/// of the valid slots and the number of values consumed. The window counts as
/// full once `period` values have been consumed; the count, not the cursor
/// position, decides that.
///
/// # Example
///
/// ```
/// use movavg::streaming::RingMovingAverage;
///
/// let mut ma = RingMovingAverage::new(2);
///
/// assert_eq!(ma.update(10.0), None);
/// assert_eq!(ma.update(20.0), Some(15.0));
/// assert_eq!(ma.update(30.0), Some(25.0));
/// ```
///
/// Integer samples are summed exactly:
///
/// ```
/// use movavg::streaming::RingMovingAverage;
///
/// let mut ma = RingMovingAverage::<i64>::new(3);
/// let averages: Vec<_> = (1..=5).filter_map(|v| ma.update(v)).collect();
/// assert_eq!(averages, vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug)]
pub struct RingMovingAverage<T = f64> {
    /// Window slots, zero until written
    buffer: Box<[T]>,
    /// Slot holding the oldest value, overwritten by the next update
    cursor: usize,
    /// Sum of the valid slots
    sum: T,
    /// Values consumed
    count: u64,
}

impl<T: Sample> RingMovingAverage<T> {
    /// Create a moving average over the last `period` values
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "window length must be at least 1");
        Self::with_period(period)
    }

    /// Create a moving average, rejecting a zero window length
    pub fn try_new(period: usize) -> Result<Self, WindowError> {
        if period == 0 {
            return Err(WindowError::ZeroPeriod);
        }
        Ok(Self::with_period(period))
    }

    fn with_period(period: usize) -> Self {
        Self {
            buffer: vec![T::zero(); period].into_boxed_slice(),
            cursor: 0,
            sum: T::zero(),
            count: 0,
        }
    }

    /// Push a value, returning the window average once `period` values
    /// have been consumed
    #[inline]
    pub fn update(&mut self, value: T) -> Option<f64> {
        let period = self.buffer.len();
        let evicted = if self.is_full() {
            self.buffer[self.cursor]
        } else {
            T::zero()
        };

        self.sum = self.sum + value - evicted;
        self.buffer[self.cursor] = value;
        self.cursor += 1;
        if self.cursor == period {
            self.cursor = 0;
        }
        self.count += 1;

        self.average()
    }

    /// Current window average, `None` until the window has filled
    pub fn average(&self) -> Option<f64> {
        if self.is_full() {
            Some(self.sum.as_() / self.buffer.len() as f64)
        } else {
            None
        }
    }

    /// Running sum of the values currently in the window
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Window length
    pub fn period(&self) -> usize {
        self.buffer.len()
    }

    /// Number of values consumed
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the window holds `period` values
    pub fn is_full(&self) -> bool {
        self.count >= self.buffer.len() as u64
    }

    /// Values currently in the window, oldest first
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        let (newer, older) = if self.is_full() {
            self.buffer.split_at(self.cursor)
        } else {
            (&self.buffer[..self.cursor], &self.buffer[..0])
        };
        older.iter().chain(newer).copied()
    }

    /// Reset to the freshly constructed state
    pub fn reset(&mut self) {
        self.buffer.fill(T::zero());
        self.cursor = 0;
        self.sum = T::zero();
        self.count = 0;
    }
}

impl<T: Sample> WindowAccumulator for RingMovingAverage<T> {
    type Item = T;

    fn update(&mut self, value: T) -> Option<f64> {
        RingMovingAverage::update(self, value)
    }

    fn period(&self) -> usize {
        self.buffer.len()
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.buffer.len() * core::mem::size_of::<T>()
    }
}
