// ============================================================================
// Benchmark Report
// Value object handed from the engine to a report sink
// ============================================================================

use crate::analysis::{MemoryComparison, MemoryFootprint};
use crate::domain::BenchmarkConfig;
use crate::numeric::Representation;
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores of one representation's pipeline against its clean reference
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepresentationMetrics {
    pub representation: Representation,

    /// MSE of the noisy (unfiltered) signal
    pub noisy_mse: f64,

    /// MSE of the filtered signal
    pub filtered_mse: f64,

    /// SNR of the noisy signal in dB
    pub noisy_snr_db: f64,

    /// SNR of the filtered signal in dB
    pub filtered_snr_db: f64,

    /// Largest pointwise error of the filtered signal
    pub max_abs_error: f64,

    /// |E(filtered) / E(clean) - 1|
    pub energy_deviation: f64,

    /// Storage estimate of the filtered signal
    pub memory: MemoryFootprint,

    /// Wall-clock time spent inside the filter
    pub filter_elapsed: Duration,
}

// ============================================================================
// Report
// ============================================================================

/// Results of one float-versus-posit benchmark run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkReport {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub config: BenchmarkConfig,

    /// Noise seed actually used (drawn from entropy when not configured)
    pub seed: u64,

    pub float: RepresentationMetrics,
    pub posit: RepresentationMetrics,
}

impl BenchmarkReport {
    pub fn metrics(&self, representation: Representation) -> &RepresentationMetrics {
        match representation {
            Representation::NativeFloat => &self.float,
            Representation::Posit16 => &self.posit,
        }
    }

    /// Filtered SNR of posit divided by filtered SNR of float.
    pub fn snr_ratio(&self) -> f64 {
        self.posit.filtered_snr_db / self.float.filtered_snr_db
    }

    pub fn memory(&self) -> MemoryComparison {
        MemoryComparison::new(self.float.memory, self.posit.memory)
    }

    /// Representation whose filter output kept its energy closest to the
    /// clean signal. Ties go to float.
    pub fn better_energy_conservation(&self) -> Representation {
        if self.posit.energy_deviation < self.float.energy_deviation {
            Representation::Posit16
        } else {
            Representation::NativeFloat
        }
    }
}
