// ============================================================================
// Benchmark Runner
// Drives generate → noise → filter → analyse once per representation
// ============================================================================

use crate::analysis::{self, MemoryFootprint};
use crate::domain::{BenchmarkConfig, BenchmarkReport, RepresentationMetrics, RunId, Signal};
use crate::engine::{MovingAverage, NoiseInjector, ScopedTimer, SineGenerator};
use crate::errors::BenchResult;
use crate::numeric::{Posit16, Sample};
use chrono::Utc;
use rand::Rng;
use std::time::Duration;

/// Signals produced by one representation's pipeline
#[derive(Debug, Clone)]
pub struct PipelineOutput<T: Sample> {
    /// Generator output before noise
    pub clean: Signal<T>,
    /// `clean` after noise injection
    pub noisy: Signal<T>,
    /// Moving average of `noisy`
    pub filtered: Signal<T>,
    /// Time spent in the filter call
    pub filter_elapsed: Duration,
}

impl<T: Sample> PipelineOutput<T> {
    /// Score the noisy and filtered signals against the clean one.
    ///
    /// All signals are widened to f64 first, so both representations are
    /// measured by the same code.
    pub fn evaluate(&self) -> BenchResult<RepresentationMetrics> {
        let clean = self.clean.to_comparable();
        let noisy = self.noisy.to_comparable();
        let filtered = self.filtered.to_comparable();

        Ok(RepresentationMetrics {
            representation: T::REPRESENTATION,
            noisy_mse: analysis::mse(&clean, &noisy)?,
            filtered_mse: analysis::mse(&clean, &filtered)?,
            noisy_snr_db: analysis::snr_db(&clean, &noisy)?,
            filtered_snr_db: analysis::snr_db(&clean, &filtered)?,
            max_abs_error: analysis::max_abs_error(&clean, &filtered)?,
            energy_deviation: analysis::energy_conservation_deviation(&clean, &filtered)?,
            memory: MemoryFootprint::of(&self.filtered),
            filter_elapsed: self.filter_elapsed,
        })
    }
}

/// Runs the float-versus-posit comparison for one configuration
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    generator: SineGenerator,
    filter: MovingAverage,
}

impl BenchmarkRunner {
    /// # Errors
    /// Any validation error of `config`.
    pub fn new(config: BenchmarkConfig) -> BenchResult<Self> {
        config.validate()?;
        let generator = SineGenerator::new(config.frequency, config.sampling_rate)?;
        let filter = MovingAverage::with_summation(config.window_size, config.summation)?;
        Ok(Self {
            config,
            generator,
            filter,
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run both pipelines and collect the comparison.
    ///
    /// Both representations see the same sequence of noise draws.
    pub fn run(&self) -> BenchResult<BenchmarkReport> {
        let run_id = RunId::new();
        let started_at = Utc::now();
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());

        tracing::info!(
            "Benchmark run {} started (N={}, window={}, noise={}, seed={})",
            run_id.as_uuid(),
            self.config.signal_length,
            self.config.window_size,
            self.config.noise_level,
            seed
        );

        let float = self.run_pipeline::<f32>(seed)?.evaluate()?;
        let posit = self.run_pipeline::<Posit16>(seed)?.evaluate()?;

        tracing::info!(
            "Benchmark run {} finished: float MSE={:e}, posit MSE={:e}",
            run_id.as_uuid(),
            float.filtered_mse,
            posit.filtered_mse
        );

        Ok(BenchmarkReport {
            run_id,
            started_at,
            config: self.config.clone(),
            seed,
            float,
            posit,
        })
    }

    /// Generate, perturb and filter in representation `T`.
    pub fn run_pipeline<T: Sample>(&self, seed: u64) -> BenchResult<PipelineOutput<T>> {
        let clean: Signal<T> = self.generator.generate(self.config.signal_length);

        let mut noisy = clean.clone();
        NoiseInjector::new(self.config.noise_level, seed)?.add_noise(&mut noisy);

        let mut filter_elapsed = Duration::ZERO;
        let filtered = {
            let _timer = ScopedTimer::start(T::REPRESENTATION.label(), &mut filter_elapsed);
            self.filter.apply(&noisy)
        };

        tracing::debug!(
            "{} pipeline filtered {} samples in {:?}",
            T::REPRESENTATION,
            filtered.len(),
            filter_elapsed
        );

        Ok(PipelineOutput {
            clean,
            noisy,
            filtered,
            filter_elapsed,
        })
    }
}
