// ============================================================================
// Signal Domain Model
// ============================================================================

use crate::numeric::{Representation, Sample};
use std::ops::Index;

/// Fixed-length, representation-homogeneous sequence of samples.
///
/// Every pipeline stage preserves the length it was constructed with. The
/// noise injector mutates samples in place through [`Signal::samples_mut`];
/// all other stages produce a new signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T: Sample> {
    samples: Vec<T>,
}

impl<T: Sample> Signal<T> {
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    /// Round each double into `T`.
    pub fn from_f64_slice(values: &[f64]) -> Self {
        Self::new(values.iter().map(|&v| T::from_f64(v)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples the backing storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    #[inline]
    pub fn representation(&self) -> Representation {
        T::REPRESENTATION
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    /// Mutable view of the samples. Length cannot change through it.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [T] {
        &mut self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Widen every sample to `f64` for cross-representation analysis.
    pub fn to_comparable(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.to_f64()).collect()
    }
}

impl<T: Sample> Index<usize> for Signal<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<T: Sample> FromIterator<T> for Signal<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Sample> IntoIterator for &'a Signal<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
