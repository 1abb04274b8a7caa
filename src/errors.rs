// ============================================================================
// Benchmark Errors
// Error types for signal generation, filtering and analysis
// ============================================================================

use std::fmt;

/// Errors that can occur while running the filter benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BenchError {
    /// Two signals handed to a comparison have different lengths
    LengthMismatch { reference: usize, processed: usize },
    /// Moving-average window must hold at least one sample
    InvalidWindowSize(usize),
    /// A run parameter is outside its valid domain
    InvalidParameter { name: &'static str, value: f64 },
    /// A metric was asked to average over zero samples
    EmptySignal,
    /// Energy ratio is undefined for a reference signal with zero energy
    ZeroEnergyReference,
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::LengthMismatch {
                reference,
                processed,
            } => write!(
                f,
                "length mismatch: reference has {} samples, processed has {}",
                reference, processed
            ),
            BenchError::InvalidWindowSize(size) => {
                write!(f, "invalid window size {}: must be at least 1", size)
            },
            BenchError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {} = {}", name, value)
            },
            BenchError::EmptySignal => write!(f, "undefined: metric over an empty signal"),
            BenchError::ZeroEnergyReference => {
                write!(f, "undefined: zero-energy reference signal")
            },
        }
    }
}

impl std::error::Error for BenchError {}

/// Result type alias for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BenchError::LengthMismatch {
                reference: 3,
                processed: 2
            }
            .to_string(),
            "length mismatch: reference has 3 samples, processed has 2"
        );
        assert_eq!(
            BenchError::ZeroEnergyReference.to_string(),
            "undefined: zero-energy reference signal"
        );
        assert_eq!(
            BenchError::InvalidWindowSize(0).to_string(),
            "invalid window size 0: must be at least 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(BenchError::EmptySignal, BenchError::EmptySignal);
        assert_ne!(BenchError::EmptySignal, BenchError::ZeroEnergyReference);
    }
}
