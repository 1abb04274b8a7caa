// ============================================================================
// Memory Accounting
// Estimated storage cost of a signal in each representation
// ============================================================================

use crate::domain::Signal;
use crate::numeric::{Representation, Sample};
use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Estimated bytes held by one signal's backing storage.
///
/// `total_bytes = capacity × sample_bytes + overhead_bytes`, where the
/// overhead is the fixed size of the owning `Vec` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryFootprint {
    pub representation: Representation,
    pub capacity: usize,
    pub sample_bytes: usize,
    pub overhead_bytes: usize,
    pub total_bytes: usize,
}

impl MemoryFootprint {
    pub fn of<T: Sample>(signal: &Signal<T>) -> Self {
        let capacity = signal.capacity();
        let sample_bytes = mem::size_of::<T>();
        let overhead_bytes = mem::size_of::<Vec<T>>();
        Self {
            representation: T::REPRESENTATION,
            capacity,
            sample_bytes,
            overhead_bytes,
            total_bytes: capacity * sample_bytes + overhead_bytes,
        }
    }
}

/// Side-by-side footprint of the float and posit versions of a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryComparison {
    pub float: MemoryFootprint,
    pub posit: MemoryFootprint,
}

impl MemoryComparison {
    pub fn new(float: MemoryFootprint, posit: MemoryFootprint) -> Self {
        Self { float, posit }
    }

    /// Absolute difference in bytes.
    pub fn difference_bytes(&self) -> usize {
        self.float.total_bytes.abs_diff(self.posit.total_bytes)
    }

    /// Float bytes per posit byte. The `Vec` header keeps both totals
    /// non-zero.
    pub fn ratio(&self) -> f64 {
        self.float.total_bytes as f64 / self.posit.total_bytes as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Posit16;

    #[test]
    fn test_footprint_of_float_signal() {
        let signal: Signal<f32> = (0..100).map(|i| i as f32).collect();
        let fp = MemoryFootprint::of(&signal);

        assert_eq!(fp.representation, Representation::NativeFloat);
        assert_eq!(fp.sample_bytes, 4);
        assert_eq!(fp.capacity, signal.capacity());
        assert_eq!(
            fp.total_bytes,
            signal.capacity() * 4 + mem::size_of::<Vec<f32>>()
        );
    }

    #[test]
    fn test_posit_uses_half_the_sample_bytes() {
        let float: Signal<f32> = Signal::new(vec![0.0; 100]);
        let posit: Signal<Posit16> = Signal::new(vec![Posit16::from_f64(0.0); 100]);

        let cmp = MemoryComparison::new(MemoryFootprint::of(&float), MemoryFootprint::of(&posit));
        assert_eq!(cmp.posit.sample_bytes, 2);
        assert_eq!(cmp.difference_bytes(), 200);

        let overhead = mem::size_of::<Vec<f32>>() as f64;
        let expected = (400.0 + overhead) / (200.0 + overhead);
        assert!((cmp.ratio() - expected).abs() < 1e-12);
        assert!(cmp.ratio() > 1.0);
    }

    #[test]
    fn test_empty_signal_footprint_is_overhead_only() {
        let signal: Signal<Posit16> = Signal::new(Vec::new());
        let fp = MemoryFootprint::of(&signal);
        assert_eq!(fp.capacity, 0);
        assert_eq!(fp.total_bytes, mem::size_of::<Vec<Posit16>>());
    }
}
