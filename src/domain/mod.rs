// ============================================================================
// Domain Models Module
// Contains the signal type, run configuration and result value objects
// ============================================================================

pub mod config;
pub mod report;
pub mod signal;

pub use config::{BenchmarkConfig, SummationOrder};
pub use report::{BenchmarkReport, RepresentationMetrics, RunId};
pub use signal::Signal;
