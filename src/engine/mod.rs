// ============================================================================
// Engine Module
// Signal pipeline stages and the benchmark driver
// ============================================================================

mod generator;
mod moving_average;
mod noise;
mod runner;
mod timer;

pub use generator::SineGenerator;
pub use moving_average::MovingAverage;
pub use noise::NoiseInjector;
pub use runner::{BenchmarkRunner, PipelineOutput};
pub use timer::ScopedTimer;
