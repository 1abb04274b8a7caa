// ============================================================================
// Analysis Module
// Cross-representation comparison metrics
// ============================================================================
//
// All functions are stateless. Signals are widened to f64 with
// `Signal::to_comparable` before they reach this module, so the same
// metric code scores both representations.

mod memory;
mod metrics;

pub use memory::{MemoryComparison, MemoryFootprint};
pub use metrics::{
    energy_conservation_deviation, max_abs_error, mse, snr_db, NOISELESS_SNR_DB,
    NOISE_POWER_EPSILON,
};
