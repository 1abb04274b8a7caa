// ============================================================================
// Sample Contract
// Arithmetic a sample representation must provide to flow through the pipeline
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies which numeric representation a signal is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Representation {
    /// IEEE 754 binary32
    NativeFloat,
    /// 16-bit posit (tapered precision)
    Posit16,
}

impl Representation {
    /// Short lowercase label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Representation::NativeFloat => "float",
            Representation::Posit16 => "posit",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric contract shared by every sample representation.
///
/// Generation, noise injection and filtering are written once against this
/// trait. Every operation stays inside the representation: `add`, `sub` and
/// `div_scalar` round with the representation's own rule, and nothing is
/// widened to `f64` except through `to_f64`.
///
/// All operations are total for finite inputs. Overflow and underflow are
/// representation specific (IEEE floats go to infinity, posits saturate) and
/// deliberately not unified.
pub trait Sample: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Which representation this type implements.
    const REPRESENTATION: Representation;

    /// Additive identity.
    fn zero() -> Self;

    /// Sum of two samples, rounded in this representation.
    fn add(self, rhs: Self) -> Self;

    /// Difference of two samples, rounded in this representation.
    fn sub(self, rhs: Self) -> Self;

    /// Divide by a scalar. The divisor is converted into this representation
    /// first, then divided.
    fn div_scalar(self, divisor: f64) -> Self;

    /// Round a double into this representation.
    fn from_f64(value: f64) -> Self;

    /// Widen to a double. Exact for both supported representations.
    fn to_f64(self) -> f64;
}

/// Native floating-point sample type.
pub type NativeFloat = f32;

impl Sample for f32 {
    const REPRESENTATION: Representation = Representation::NativeFloat;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn div_scalar(self, divisor: f64) -> Self {
        self / divisor as f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_contract() {
        let a = <f32 as Sample>::from_f64(1.5);
        let b = <f32 as Sample>::from_f64(0.25);
        assert_eq!(Sample::add(a, b), 1.75);
        assert_eq!(Sample::sub(a, b), 1.25);
        assert_eq!(a.div_scalar(3.0), 0.5);
        assert_eq!(<f32 as Sample>::zero(), 0.0);
    }

    #[test]
    fn test_float_roundtrip_is_exact() {
        for &x in &[0.0f32, -0.0, 1.0, -1.0, 0.1, 3.0e-38, 1.0e38, f32::MIN_POSITIVE] {
            assert_eq!(<f32 as Sample>::from_f64(x.to_f64()), x);
        }
    }

    #[test]
    fn test_float_overflow_is_infinite() {
        let big = <f32 as Sample>::from_f64(f32::MAX as f64);
        assert!(Sample::add(big, big).is_infinite());
        assert!(<f32 as Sample>::from_f64(1.0e300).is_infinite());
    }

    #[test]
    fn test_representation_labels() {
        assert_eq!(Representation::NativeFloat.to_string(), "float");
        assert_eq!(Representation::Posit16.to_string(), "posit");
        assert_eq!(f32::REPRESENTATION, Representation::NativeFloat);
    }
}
