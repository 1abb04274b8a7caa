// ============================================================================
// Comparison Metrics
// Pure error statistics between a reference and a processed signal
// ============================================================================
//
// Every function takes two widened (f64) signals of equal length, accumulates
// in f64 and has no side effects. Unequal lengths are reported, never
// truncated or padded. Empty inputs are rejected with `EmptySignal`, since
// every statistic here is a mean, an extremum or a ratio over the samples.

use crate::errors::{BenchError, BenchResult};

/// Noise power below which a signal is judged noiseless
pub const NOISE_POWER_EPSILON: f64 = 1e-10;

/// SNR reported for a noiseless comparison (largest finite double)
pub const NOISELESS_SNR_DB: f64 = f64::MAX;

fn check_pair(reference: &[f64], processed: &[f64]) -> BenchResult<()> {
    if reference.len() != processed.len() {
        return Err(BenchError::LengthMismatch {
            reference: reference.len(),
            processed: processed.len(),
        });
    }
    if reference.is_empty() {
        return Err(BenchError::EmptySignal);
    }
    Ok(())
}

#[inline]
fn mean_square(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    values.map(|v| v * v).sum::<f64>() / len as f64
}

#[inline]
fn energy(signal: &[f64]) -> f64 {
    signal.iter().map(|v| v * v).sum()
}

/// Mean squared error: `mean((ref[i] - proc[i])^2)`.
pub fn mse(reference: &[f64], processed: &[f64]) -> BenchResult<f64> {
    check_pair(reference, processed)?;
    Ok(mean_square(
        reference.iter().zip(processed).map(|(r, p)| r - p),
        reference.len(),
    ))
}

/// Signal-to-noise ratio in decibels.
///
/// Signal power is the mean square of `reference`; noise power is the MSE
/// between the two. A noise power under [`NOISE_POWER_EPSILON`] returns
/// [`NOISELESS_SNR_DB`] instead of infinity.
pub fn snr_db(reference: &[f64], processed: &[f64]) -> BenchResult<f64> {
    check_pair(reference, processed)?;

    let signal_power = mean_square(reference.iter().copied(), reference.len());
    let noise_power = mean_square(
        reference.iter().zip(processed).map(|(r, p)| r - p),
        reference.len(),
    );

    if noise_power < NOISE_POWER_EPSILON {
        return Ok(NOISELESS_SNR_DB);
    }

    Ok(10.0 * (signal_power / noise_power).log10())
}

/// Largest pointwise deviation: `max |ref[i] - proc[i]|`.
///
/// A NaN deviation (e.g. `inf - inf` after float overflow) is returned as NaN.
pub fn max_abs_error(reference: &[f64], processed: &[f64]) -> BenchResult<f64> {
    check_pair(reference, processed)?;
    Ok(reference
        .iter()
        .zip(processed)
        .map(|(r, p)| (r - p).abs())
        .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc }))
}

/// Energy-conservation deviation: `|E(processed) / E(reference) - 1|`,
/// where `E` is the sum of squares.
///
/// # Errors
/// `ZeroEnergyReference` when the reference has no energy.
pub fn energy_conservation_deviation(reference: &[f64], processed: &[f64]) -> BenchResult<f64> {
    check_pair(reference, processed)?;

    let input_energy = energy(reference);
    if input_energy == 0.0 {
        return Err(BenchError::ZeroEnergyReference);
    }

    Ok((energy(processed) / input_energy - 1.0).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: [f64; 4] = [1.0, -1.0, 0.5, 0.0];
    const PROC: [f64; 4] = [0.5, -1.0, 1.0, 0.0];

    #[test]
    fn test_mse() {
        // (0.25 + 0 + 0.25 + 0) / 4
        assert_eq!(mse(&REF, &PROC).unwrap(), 0.125);
    }

    #[test]
    fn test_reflexivity() {
        assert_eq!(mse(&REF, &REF).unwrap(), 0.0);
        assert_eq!(max_abs_error(&REF, &REF).unwrap(), 0.0);
        assert_eq!(energy_conservation_deviation(&REF, &REF).unwrap(), 0.0);
        assert_eq!(snr_db(&REF, &REF).unwrap(), NOISELESS_SNR_DB);
    }

    #[test]
    fn test_snr_db() {
        // signal power 2.25 / 4, noise power 0.125
        let expected = 10.0 * ((2.25 / 4.0) / 0.125f64).log10();
        let snr = snr_db(&REF, &PROC).unwrap();
        assert!((snr - expected).abs() < 1e-12);
    }

    #[test]
    fn test_snr_epsilon_guard() {
        let reference = [1.0, 1.0];
        let processed = [1.0 + 1e-6, 1.0 - 1e-6];
        assert_eq!(snr_db(&reference, &processed).unwrap(), NOISELESS_SNR_DB);
    }

    #[test]
    fn test_max_abs_error() {
        assert_eq!(max_abs_error(&REF, &PROC).unwrap(), 0.5);
        assert_eq!(max_abs_error(&[0.0, 0.0], &[-3.0, 2.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_max_abs_error_propagates_nan() {
        let reference = [f64::INFINITY, 0.0, 1.0];
        let processed = [f64::INFINITY, 0.5, 5.0];
        assert!(mse(&reference, &processed).unwrap().is_nan());
        assert!(max_abs_error(&reference, &processed).unwrap().is_nan());
        assert!(max_abs_error(&[0.0, 1.0], &[f64::NAN, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_energy_conservation_deviation() {
        // E(ref) = 2.25, E(proc) = 2.25
        assert_eq!(energy_conservation_deviation(&REF, &PROC).unwrap(), 0.0);

        let halved = [0.5, -0.5, 0.25, 0.0];
        let dev = energy_conservation_deviation(&REF, &halved).unwrap();
        assert!((dev - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_energy_reference() {
        assert_eq!(
            energy_conservation_deviation(&[0.0, 0.0], &[1.0, 0.0]),
            Err(BenchError::ZeroEnergyReference)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let expected = Err(BenchError::LengthMismatch {
            reference: 4,
            processed: 3,
        });
        assert_eq!(mse(&REF, &PROC[..3]), expected);
        assert_eq!(snr_db(&REF, &PROC[..3]), expected);
        assert_eq!(max_abs_error(&REF, &PROC[..3]), expected);
        assert_eq!(energy_conservation_deviation(&REF, &PROC[..3]), expected);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mse(&[], &[]), Err(BenchError::EmptySignal));
        assert_eq!(snr_db(&[], &[]), Err(BenchError::EmptySignal));
        assert_eq!(max_abs_error(&[], &[]), Err(BenchError::EmptySignal));
        assert_eq!(
            energy_conservation_deviation(&[], &[]),
            Err(BenchError::EmptySignal)
        );
    }

    #[test]
    fn test_idempotent() {
        let first = mse(&REF, &PROC).unwrap();
        let second = mse(&REF, &PROC).unwrap();
        assert_eq!(first, second);
    }
}
