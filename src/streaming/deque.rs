//! Queue-backed moving average

use crate::traits::{Sample, WindowAccumulator, WindowError};

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

/// Streaming moving average over a double-ended queue
///
/// Pushes every value to the back and pops the front once the queue holds
/// more than `period` values. Produces the same averages as
/// [`RingMovingAverage`](super::RingMovingAverage); kept as an independent
/// implementation to cross-check it.
///
/// ```
/// use movavg::streaming::DequeMovingAverage;
///
/// let mut ma = DequeMovingAverage::new(3);
/// let averages: Vec<_> = [1.0, 2.0, 3.0, 4.0]
///     .into_iter()
///     .map(|v| ma.update(v))
///     .collect();
/// assert_eq!(averages, vec![None, None, Some(2.0), Some(3.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct DequeMovingAverage<T = f64> {
    period: usize,
    sum: T,
    window: VecDeque<T>,
    count: u64,
}

impl<T: Sample> DequeMovingAverage<T> {
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
            period,
            sum: T::zero(),
            // one spare slot for the push that precedes each pop
            window: VecDeque::with_capacity(period + 1),
            count: 0,
        }
    }

    /// Push a value, returning the window average once `period` values
    /// have been consumed
    pub fn update(&mut self, value: T) -> Option<f64> {
        self.window.push_back(value);
        let evicted = if self.window.len() > self.period {
            self.window.pop_front().unwrap_or_else(T::zero)
        } else {
            T::zero()
        };
        self.sum = self.sum + value - evicted;
        self.count += 1;
        self.average()
    }

    /// Current window average, `None` until the window has filled
    pub fn average(&self) -> Option<f64> {
        if self.window.len() == self.period {
            Some(self.sum.as_() / self.period as f64)
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
        self.period
    }

    /// Number of values consumed
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Sample> WindowAccumulator for DequeMovingAverage<T> {
    type Item = T;

    fn update(&mut self, value: T) -> Option<f64> {
        DequeMovingAverage::update(self, value)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        self.window.clear();
        self.sum = T::zero();
        self.count = 0;
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.window.capacity() * core::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut ma = DequeMovingAverage::new(2);

        assert_eq!(ma.update(10.0), None);
        assert_eq!(ma.update(20.0), Some(15.0));
        assert_eq!(ma.update(30.0), Some(25.0));
        assert_eq!(ma.sum(), 50.0);
    }

    #[test]
    fn test_window_never_exceeds_period() {
        let mut ma = DequeMovingAverage::new(4);
        for i in 0..100 {
            ma.update(i as f64);
            assert!(ma.window.len() <= 4);
        }
        assert_eq!(ma.count(), 100);
        assert_eq!(ma.average(), Some((96.0 + 97.0 + 98.0 + 99.0) / 4.0));
    }

    #[test]
    fn test_clear() {
        let mut ma = DequeMovingAverage::new(2);
        ma.update(1.0);
        ma.update(2.0);

        ma.clear();

        assert!(ma.is_empty());
        assert_eq!(ma.update(4.0), None);
        assert_eq!(ma.update(6.0), Some(5.0));
    }

    #[test]
    fn test_try_new() {
        assert!(DequeMovingAverage::<i32>::try_new(0).is_err());
        assert_eq!(DequeMovingAverage::<i32>::try_new(3).unwrap().period(), 3);
    }
}
