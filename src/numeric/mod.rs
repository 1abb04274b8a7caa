// ============================================================================
// Numeric Module
// Sample representations the filter pipeline can run over
// ============================================================================
//
// This module provides:
// - Sample: the arithmetic contract every representation implements
// - NativeFloat: IEEE 754 binary32 samples
// - Posit16: 16-bit tapered-precision samples (fast-posit kernel)
// - Representation: tag naming a representation in configs and reports
//
// Design principles:
// - One algorithm, many representations (static dispatch via generics)
// - Accumulation stays inside the representation; f64 only at analysis time
// - No representation-specific overflow handling is unified

mod posit16;
mod sample;

pub use posit16::Posit16;
pub use sample::{NativeFloat, Representation, Sample};

#[cfg(test)]
pub(crate) use posit16::ulp_at;
