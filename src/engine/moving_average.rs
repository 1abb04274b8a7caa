// ============================================================================
// Moving-Average Filter
// Causal sliding-window smoothing, generic over the sample representation
// ============================================================================

use crate::domain::{Signal, SummationOrder};
use crate::errors::{BenchError, BenchResult};
use crate::numeric::Sample;

/// Causal moving average with an expanding-then-fixed window.
///
/// Output `i` is the mean of the last `w = min(window_size, i + 1)` inputs.
/// There is no zero padding and no look-ahead. Sums are accumulated in the
/// sample representation itself (never widened), then divided by `w` with
/// the representation's `div_scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window_size: usize,
    summation: SummationOrder,
}

impl MovingAverage {
    /// Create a filter using [`SummationOrder::Naive`].
    ///
    /// # Errors
    /// `InvalidWindowSize` if `window_size` is zero.
    pub fn new(window_size: usize) -> BenchResult<Self> {
        Self::with_summation(window_size, SummationOrder::Naive)
    }

    pub fn with_summation(window_size: usize, summation: SummationOrder) -> BenchResult<Self> {
        if window_size == 0 {
            return Err(BenchError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            window_size,
            summation,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn summation(&self) -> SummationOrder {
        self.summation
    }

    /// Filter `input`, producing a signal of the same length.
    pub fn apply<T: Sample>(&self, input: &Signal<T>) -> Signal<T> {
        tracing::trace!(
            "Moving average over {} {} samples (window={}, summation={:?})",
            input.len(),
            T::REPRESENTATION,
            self.window_size,
            self.summation
        );

        let samples = input.as_slice();
        let output = match self.summation {
            SummationOrder::Naive => self.naive(samples),
            SummationOrder::Sliding => self.sliding(samples),
        };
        Signal::new(output)
    }

    /// Re-sum each window from zero, newest sample first.
    fn naive<T: Sample>(&self, samples: &[T]) -> Vec<T> {
        let mut output = Vec::with_capacity(samples.len());

        for i in 0..samples.len() {
            let w = self.window_size.min(i + 1);
            output.push(window_sum(&samples[i + 1 - w..=i]).div_scalar(w as f64));
        }

        output
    }

    /// Running sum: add the incoming sample, subtract the one leaving.
    ///
    /// Every `window_size` outputs the sum is rebuilt from the current window
    /// in `naive` order, so rounding drift is bounded by one window of
    /// updates and those outputs match `naive` exactly.
    fn sliding<T: Sample>(&self, samples: &[T]) -> Vec<T> {
        let mut output = Vec::with_capacity(samples.len());
        let mut sum = T::zero();

        for (i, &sample) in samples.iter().enumerate() {
            if i >= self.window_size && i % self.window_size == 0 {
                sum = window_sum(&samples[i + 1 - self.window_size..=i]);
            } else {
                sum = sum.add(sample);
                if i >= self.window_size {
                    sum = sum.sub(samples[i - self.window_size]);
                }
            }
            let w = self.window_size.min(i + 1);
            output.push(sum.div_scalar(w as f64));
        }

        output
    }
}

#[inline]
fn window_sum<T: Sample>(window: &[T]) -> T {
    window.iter().rev().fold(T::zero(), |acc, &s| acc.add(s))
}
