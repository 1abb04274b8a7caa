// ============================================================================
// Noise Injector
// Additive Gaussian perturbation in any sample representation
// ============================================================================

use crate::domain::Signal;
use crate::errors::{BenchError, BenchResult};
use crate::numeric::Sample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Adds zero-mean Gaussian noise to a signal in place.
///
/// The random source is always explicitly seeded. Two injectors built from
/// the same seed produce the same sequence of draws, which is how the float
/// and posit pipelines receive identical noise.
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    noise_level: f64,
    seed: u64,
    rng: StdRng,
}

impl NoiseInjector {
    /// # Errors
    /// `InvalidParameter` if `noise_level` is negative or not finite.
    pub fn new(noise_level: f64, seed: u64) -> BenchResult<Self> {
        if !noise_level.is_finite() || noise_level < 0.0 {
            return Err(BenchError::InvalidParameter {
                name: "noise_level",
                value: noise_level,
            });
        }
        Ok(Self {
            noise_level,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Seed from OS entropy. The chosen seed is available via [`seed`](Self::seed).
    pub fn from_entropy(noise_level: f64) -> BenchResult<Self> {
        Self::new(noise_level, rand::thread_rng().gen())
    }

    pub fn noise_level(&self) -> f64 {
        self.noise_level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Perturb every sample with one independent draw.
    ///
    /// The standard deviation is first rounded through `T`, so a posit
    /// pipeline uses the posit-quantized noise level. Each draw is rounded
    /// into `T` and added with the representation's own `add`.
    pub fn add_noise<T: Sample>(&mut self, signal: &mut Signal<T>) {
        let std_dev = T::from_f64(self.noise_level).to_f64();
        tracing::debug!(
            "Adding noise to {} {} samples (std_dev={}, seed={})",
            signal.len(),
            T::REPRESENTATION,
            std_dev,
            self.seed
        );

        for sample in signal.samples_mut() {
            let z: f64 = self.rng.sample(StandardNormal);
            *sample = sample.add(T::from_f64(std_dev * z));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Posit16;

    fn zeros<T: Sample>(len: usize) -> Signal<T> {
        (0..len).map(|_| T::zero()).collect()
    }

    #[test]
    fn test_same_seed_same_noise() {
        let mut a = zeros::<f32>(64);
        let mut b = zeros::<f32>(64);
        NoiseInjector::new(0.1, 42).unwrap().add_noise(&mut a);
        NoiseInjector::new(0.1, 42).unwrap().add_noise(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_noise() {
        let mut a = zeros::<f32>(64);
        let mut b = zeros::<f32>(64);
        NoiseInjector::new(0.1, 1).unwrap().add_noise(&mut a);
        NoiseInjector::new(0.1, 2).unwrap().add_noise(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_noise_level_is_identity() {
        let mut signal: Signal<Posit16> = Signal::from_f64_slice(&[0.5, -0.25, 1.0]);
        let before = signal.clone();
        NoiseInjector::new(0.0, 9).unwrap().add_noise(&mut signal);
        assert_eq!(signal, before);
    }

    #[test]
    fn test_noise_statistics() {
        let mut signal = zeros::<f32>(10_000);
        NoiseInjector::new(0.5, 1234).unwrap().add_noise(&mut signal);

        let values = signal.to_comparable();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var.sqrt() - 0.5).abs() < 0.05, "std {}", var.sqrt());
    }

    #[test]
    fn test_representations_share_draws() {
        let mut float = zeros::<f32>(32);
        let mut posit = zeros::<Posit16>(32);
        NoiseInjector::new(0.25, 5).unwrap().add_noise(&mut float);
        NoiseInjector::new(0.25, 5).unwrap().add_noise(&mut posit);

        for (f, p) in float.iter().zip(posit.iter()) {
            assert!((f.to_f64() - p.to_f64()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_preserves_length() {
        let mut signal = zeros::<Posit16>(17);
        NoiseInjector::from_entropy(0.01).unwrap().add_noise(&mut signal);
        assert_eq!(signal.len(), 17);
    }

    #[test]
    fn test_rejects_invalid_noise_level() {
        assert!(NoiseInjector::new(-0.1, 0).is_err());
        assert!(NoiseInjector::new(f64::NAN, 0).is_err());
    }
}
