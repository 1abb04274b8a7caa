// ============================================================================
// 16-bit Posit Sample
// Tapered-precision sample backed by the fast-posit kernel
// ============================================================================

use super::sample::{Representation, Sample};
use fast_posit::{p16, RoundFrom};
use std::fmt;

/// 16-bit posit sample (2 exponent bits).
///
/// Precision is highest around ±1 (11 fraction bits) and tapers off towards
/// the extremes, where values saturate at the largest representable posit
/// instead of overflowing. All bit-level encoding and rounding is done by
/// the `fast-posit` kernel; this type only adapts it to [`Sample`].
///
/// # Example
/// ```
/// use posit_dsp_bench::numeric::{Posit16, Sample};
///
/// let a = Posit16::from_f64(0.75);
/// let b = Posit16::from_f64(0.25);
/// assert_eq!(a.add(b).to_f64(), 1.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Posit16(p16);

impl Posit16 {
    /// Raw 16-bit encoding.
    #[inline]
    pub fn to_bits(self) -> i16 {
        self.0.to_bits()
    }

    /// True for NaR ("not a real"), the posit result of NaN/infinite inputs.
    #[inline]
    pub fn is_nar(self) -> bool {
        self.to_f64().is_nan()
    }
}

/// Larger of the two gaps between `|x|` (rounded to a posit) and its
/// neighbours. Tolerances in tests are expressed in these units.
#[cfg(test)]
pub(crate) fn ulp_at(x: f64) -> f64 {
    let q = Posit16::from_f64(x.abs());
    let gap = |bits: Option<i16>| {
        bits.filter(|b| *b > 0)
            .map(|b| (Posit16(p16::from_bits(b)).to_f64() - q.to_f64()).abs())
            .unwrap_or(0.0)
    };
    let bits = q.to_bits();
    gap(bits.checked_add(1)).max(gap(bits.checked_sub(1)))
}

impl Sample for Posit16 {
    const REPRESENTATION: Representation = Representation::Posit16;

    #[inline]
    fn zero() -> Self {
        Self(p16::round_from(0.0_f64))
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }

    #[inline]
    fn div_scalar(self, divisor: f64) -> Self {
        Self(self.0 / p16::round_from(divisor))
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self(p16::round_from(value))
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::round_from(self.0)
    }
}

impl Default for Posit16 {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Posit16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Posit16({}, bits={:#06x})", self.to_f64(), self.to_bits())
    }
}

impl fmt::Display for Posit16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64) -> Posit16 {
        Posit16::from_f64(x)
    }

    #[test]
    fn test_size() {
        assert_eq!(std::mem::size_of::<Posit16>(), 2);
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(Posit16::zero().to_f64(), 0.0);
        assert_eq!(p(1.0).to_f64(), 1.0);
        assert_eq!(p(-0.5).to_f64(), -0.5);
        assert_eq!(p(0.75).add(p(0.25)).to_f64(), 1.0);
        assert_eq!(p(1.0).sub(p(0.25)).to_f64(), 0.75);
        assert_eq!(p(3.0).div_scalar(2.0).to_f64(), 1.5);
    }

    #[test]
    fn test_roundtrip_through_double() {
        for &x in &[0.0, 1.0, -1.0, 0.1, -0.333, 2.5, 100.7, 1.0e-6, 12345.0] {
            let q = p(x);
            assert_eq!(p(q.to_f64()), q, "roundtrip drifted for {}", x);
        }
    }

    #[test]
    fn test_quantization_near_one() {
        let q = p(0.1).to_f64();
        assert!((q - 0.1).abs() < 1e-4, "0.1 quantized to {}", q);
    }

    #[test]
    fn test_tapered_precision() {
        let err_near_one = (p(1.0003).to_f64() - 1.0003).abs();
        let err_far = (p(1000.3).to_f64() - 1000.3).abs();
        assert!(err_far > err_near_one);
        assert!(err_near_one < 1e-3);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let huge = p(1.0e30);
        assert!(huge.to_f64().is_finite());
        assert!(huge.to_f64() > 1.0e16);

        let sum = huge.add(huge);
        assert!(sum.to_f64().is_finite());
        assert!(!sum.is_nar());
    }

    #[test]
    fn test_nan_maps_to_nar() {
        assert!(p(f64::NAN).is_nar());
    }

    #[test]
    fn test_ulp_tapers_with_magnitude() {
        // 11 fraction bits in [1, 2), 10 in [16, 32)
        assert_eq!(ulp_at(1.5), 2.0f64.powi(-11));
        assert_eq!(ulp_at(20.0), 2.0f64.powi(-6));
        assert!(ulp_at(0.5) < ulp_at(1.5));
        assert!(ulp_at(0.0) > 0.0);
    }

    #[test]
    fn test_debug_format() {
        let dbg = format!("{:?}", p(1.0));
        assert!(dbg.starts_with("Posit16(1, bits="));
    }
}
