// ============================================================================
// Sine Generator
// Deterministic test signal in any sample representation
// ============================================================================

use crate::domain::Signal;
use crate::errors::{BenchError, BenchResult};
use crate::numeric::Sample;
use std::f64::consts::PI;

/// Produces `sin(2π·f·n / fs)` for `n` in `0..len`.
///
/// Each value is evaluated in double precision and rounded once into the
/// target representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineGenerator {
    frequency: f64,
    sampling_rate: f64,
}

impl SineGenerator {
    /// # Errors
    /// `InvalidParameter` for a non-finite frequency or a sampling rate that
    /// is not finite and positive.
    pub fn new(frequency: f64, sampling_rate: f64) -> BenchResult<Self> {
        if !frequency.is_finite() {
            return Err(BenchError::InvalidParameter {
                name: "frequency",
                value: frequency,
            });
        }
        if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
            return Err(BenchError::InvalidParameter {
                name: "sampling_rate",
                value: sampling_rate,
            });
        }
        Ok(Self {
            frequency,
            sampling_rate,
        })
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Value of sample `n` before rounding into a representation.
    #[inline]
    pub fn value_at(&self, n: usize) -> f64 {
        (2.0 * PI * self.frequency * n as f64 / self.sampling_rate).sin()
    }

    pub fn generate<T: Sample>(&self, len: usize) -> Signal<T> {
        tracing::trace!(
            "Generating {} {} samples at {} Hz / {} Hz",
            len,
            T::REPRESENTATION,
            self.frequency,
            self.sampling_rate
        );
        (0..len).map(|n| T::from_f64(self.value_at(n))).collect()
    }
}
