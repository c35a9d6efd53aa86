//! Iterator adapters driving a [`WindowAccumulator`]

use core::iter::FusedIterator;

use super::RingMovingAverage;
use crate::traits::{Sample, WindowAccumulator};

/// Yields one `Option<f64>` per input value, aligned with the input
///
/// Created by [`MovingAverageExt::moving_average`].
#[derive(Clone, Debug)]
pub struct Aligned<I, A> {
    iter: I,
    accumulator: A,
}

impl<I, A> Aligned<I, A> {
    /// Drive `accumulator` with the values of `iter`
    pub fn new(iter: I, accumulator: A) -> Self {
        Self { iter, accumulator }
    }

    /// The accumulator in its current state
    pub fn accumulator(&self) -> &A {
        &self.accumulator
    }
}

impl<I, A> Iterator for Aligned<I, A>
where
    I: Iterator,
    A: WindowAccumulator<Item = I::Item>,
{
    type Item = Option<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        Some(self.accumulator.update(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, A> ExactSizeIterator for Aligned<I, A>
where
    I: ExactSizeIterator,
    A: WindowAccumulator<Item = I::Item>,
{
}

impl<I, A> FusedIterator for Aligned<I, A>
where
    I: FusedIterator,
    A: WindowAccumulator<Item = I::Item>,
{
}

/// Yields only the averages of complete windows
///
/// Created by [`MovingAverageExt::moving_averages`].
#[derive(Clone, Debug)]
pub struct Ready<I, A> {
    inner: Aligned<I, A>,
}

impl<I, A> Ready<I, A> {
    /// Drive `accumulator` with the values of `iter`
    pub fn new(iter: I, accumulator: A) -> Self {
        Self {
            inner: Aligned::new(iter, accumulator),
        }
    }

    /// The accumulator in its current state
    pub fn accumulator(&self) -> &A {
        self.inner.accumulator()
    }
}

impl<I, A> Iterator for Ready<I, A>
where
    I: Iterator,
    A: WindowAccumulator<Item = I::Item>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let pending = self
            .inner
            .accumulator
            .period()
            .saturating_sub(self.inner.accumulator.count() as usize);
        let pending_upper = pending.saturating_sub(1);
        (
            lower.saturating_sub(pending_upper),
            upper.map(|u| u.saturating_sub(pending_upper)),
        )
    }
}

impl<I, A> FusedIterator for Ready<I, A>
where
    I: FusedIterator,
    A: WindowAccumulator<Item = I::Item>,
{
}

/// Moving-average adapters for any iterator of samples
///
/// ```
/// use movavg::streaming::MovingAverageExt;
///
/// let aligned: Vec<_> = [10.0, 20.0, 30.0].into_iter().moving_average(2).collect();
/// assert_eq!(aligned, vec![None, Some(15.0), Some(25.0)]);
///
/// let ready: Vec<_> = (1..=7).moving_averages(3).collect();
/// assert_eq!(ready, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub trait MovingAverageExt: Iterator + Sized
where
    Self::Item: Sample,
{
    /// One entry per input: `None` while the window fills, then the
    /// average of the window ending at that input
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero
    fn moving_average(self, period: usize) -> Aligned<Self, RingMovingAverage<Self::Item>> {
        Aligned::new(self, RingMovingAverage::new(period))
    }

    /// Only the averages of complete windows
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero
    fn moving_averages(self, period: usize) -> Ready<Self, RingMovingAverage<Self::Item>> {
        Ready::new(self, RingMovingAverage::new(period))
    }
}

impl<I> MovingAverageExt for I
where
    I: Iterator,
    I::Item: Sample,
{
}
