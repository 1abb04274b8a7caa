// ============================================================================
// Benchmark Configuration
// Run parameters for the float-versus-posit filter comparison
// ============================================================================

use crate::errors::{BenchError, BenchResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Summation Order
// ============================================================================

/// How the moving-average filter accumulates each window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SummationOrder {
    /// Re-sum every window from zero, newest sample first - O(N·window)
    #[default]
    Naive,

    /// Running sum, rebuilt from scratch every `window` outputs - O(N)
    Sliding,
}

// ============================================================================
// Benchmark Configuration
// ============================================================================

/// Parameters of a single benchmark run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkConfig {
    /// Number of samples in the test signal (N)
    pub signal_length: usize,

    /// Sine frequency in Hz
    pub frequency: f64,

    /// Sampling frequency in Hz
    pub sampling_rate: f64,

    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,

    /// Maximum number of trailing samples averaged per output point
    pub window_size: usize,

    /// Accumulation strategy of the moving-average filter
    pub summation: SummationOrder,

    /// Optional: Fixed noise seed for reproducible runs
    /// None draws a fresh seed from OS entropy (recorded in the report)
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    /// Signal length of the reference run
    pub const REFERENCE_SIGNAL_LENGTH: usize = 100;
    /// Sine frequency of the reference run (Hz)
    pub const REFERENCE_FREQUENCY: f64 = 5.0;
    /// Sampling frequency of the reference run (Hz)
    pub const REFERENCE_SAMPLING_RATE: f64 = 100.0;
    /// Noise standard deviation of the reference run
    pub const REFERENCE_NOISE_LEVEL: f64 = 0.005;
    /// Window size of the reference run
    pub const REFERENCE_WINDOW_SIZE: usize = 10;

    /// Create a new configuration with required parameters
    pub fn new(
        signal_length: usize,
        frequency: f64,
        sampling_rate: f64,
        noise_level: f64,
        window_size: usize,
    ) -> Self {
        Self {
            signal_length,
            frequency,
            sampling_rate,
            noise_level,
            window_size,
            summation: SummationOrder::Naive,
            seed: None,
        }
    }

    /// Builder method: Set signal length
    pub fn with_signal_length(mut self, signal_length: usize) -> Self {
        self.signal_length = signal_length;
        self
    }

    /// Builder method: Set noise standard deviation
    pub fn with_noise_level(mut self, noise_level: f64) -> Self {
        self.noise_level = noise_level;
        self
    }

    /// Builder method: Set moving-average window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: Set summation order
    pub fn with_summation(mut self, summation: SummationOrder) -> Self {
        self.summation = summation;
        self
    }

    /// Builder method: Fix the noise seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> BenchResult<()> {
        if self.window_size == 0 {
            return Err(BenchError::InvalidWindowSize(self.window_size));
        }

        if !self.frequency.is_finite() {
            return Err(BenchError::InvalidParameter {
                name: "frequency",
                value: self.frequency,
            });
        }

        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(BenchError::InvalidParameter {
                name: "sampling_rate",
                value: self.sampling_rate,
            });
        }

        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(BenchError::InvalidParameter {
                name: "noise_level",
                value: self.noise_level,
            });
        }

        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::reference()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl BenchmarkConfig {
    /// Reference run
    /// - 100 samples of a 5 Hz sine sampled at 100 Hz
    /// - Noise σ = 0.005
    /// - 10-sample window, naive summation
    pub fn reference() -> Self {
        Self::new(
            Self::REFERENCE_SIGNAL_LENGTH,
            Self::REFERENCE_FREQUENCY,
            Self::REFERENCE_SAMPLING_RATE,
            Self::REFERENCE_NOISE_LEVEL,
            Self::REFERENCE_WINDOW_SIZE,
        )
    }

    /// Configuration where smoothing clearly pays off
    /// - 1000 samples of a 5 Hz sine sampled at 1 kHz (200 samples per period)
    /// - Noise σ = 0.2
    /// - 10-sample window, so phase lag stays small next to the noise
    pub fn smoothing_demo() -> Self {
        Self::new(1000, 5.0, 1000.0, 0.2, 10)
    }
}
