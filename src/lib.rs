// ============================================================================
// Posit DSP Benchmark Library
// Moving-average filtering in IEEE f32 versus 16-bit posit arithmetic
// ============================================================================

//! # Posit DSP Benchmark
//!
//! Generates a sine wave, corrupts it with Gaussian noise, smooths it with a
//! causal moving-average filter and measures how accuracy and memory
//! footprint differ between `f32` samples and 16-bit posits.
//!
//! ## Features
//!
//! - **One algorithm, two arithmetics**: generator, noise injector and filter
//!   are generic over the [`Sample`](numeric::Sample) contract
//! - **Accumulation in the sample format**: window sums are rounded by the
//!   representation under test, never widened
//! - **Pure analysis**: MSE, SNR, max absolute error, energy-conservation
//!   deviation and memory accounting over widened `f64` signals
//! - **Reproducible noise**: explicitly seeded, shared across representations
//! - **Pluggable output** through [`ReportSink`](interfaces::ReportSink)
//!
//! ## Example
//!
//! ```rust
//! use posit_dsp_bench::prelude::*;
//!
//! let config = BenchmarkConfig::reference().with_seed(42);
//! let report = BenchmarkRunner::new(config).unwrap().run().unwrap();
//!
//! println!("float MSE: {:e}", report.float.filtered_mse);
//! println!("posit MSE: {:e}", report.posit.filtered_mse);
//! println!("memory ratio: {:.3}", report.memory().ratio());
//!
//! let mut sink = TextReportSink::new(Vec::new());
//! sink.emit(&report).unwrap();
//! ```

pub mod analysis;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::analysis::{
        energy_conservation_deviation, max_abs_error, mse, snr_db, MemoryComparison,
        MemoryFootprint, NOISELESS_SNR_DB,
    };
    pub use crate::domain::{
        BenchmarkConfig, BenchmarkReport, RepresentationMetrics, RunId, Signal, SummationOrder,
    };
    pub use crate::engine::{
        BenchmarkRunner, MovingAverage, NoiseInjector, PipelineOutput, ScopedTimer,
        SineGenerator,
    };
    pub use crate::errors::{BenchError, BenchResult};
    pub use crate::interfaces::{LoggingReportSink, NoOpReportSink, ReportSink, TextReportSink};
    pub use crate::numeric::{NativeFloat, Posit16, Representation, Sample};

    #[cfg(feature = "serde")]
    pub use crate::interfaces::JsonReportSink;
}
