// ============================================================================
// posit-bench
// Command line front end: parse run parameters, run, hand off to a sink
// ============================================================================

use clap::{Parser, ValueEnum};
use posit_dsp_bench::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummationArg {
    /// Re-sum each window newest-first
    Naive,
    /// O(N) running sum
    Sliding,
}

impl From<SummationArg> for SummationOrder {
    fn from(arg: SummationArg) -> Self {
        match arg {
            SummationArg::Naive => SummationOrder::Naive,
            SummationArg::Sliding => SummationOrder::Sliding,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "posit-bench")]
#[command(about = "Moving-average filter accuracy: f32 versus 16-bit posit", long_about = None)]
struct Cli {
    /// Number of samples in the test signal
    #[arg(long, default_value_t = BenchmarkConfig::REFERENCE_SIGNAL_LENGTH)]
    length: usize,

    /// Sine frequency (Hz)
    #[arg(long, default_value_t = BenchmarkConfig::REFERENCE_FREQUENCY)]
    frequency: f64,

    /// Sampling frequency (Hz)
    #[arg(long, default_value_t = BenchmarkConfig::REFERENCE_SAMPLING_RATE)]
    sampling_rate: f64,

    /// Standard deviation of the additive Gaussian noise
    #[arg(long, default_value_t = BenchmarkConfig::REFERENCE_NOISE_LEVEL)]
    noise_level: f64,

    /// Moving-average window size
    #[arg(long, default_value_t = BenchmarkConfig::REFERENCE_WINDOW_SIZE)]
    window: usize,

    /// Window accumulation strategy
    #[arg(long, value_enum, default_value_t = SummationArg::Naive)]
    summation: SummationArg,

    /// Fixed noise seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of a table
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(
            self.length,
            self.frequency,
            self.sampling_rate,
            self.noise_level,
            self.window,
        )
        .with_summation(self.summation.into());
        config.seed = self.seed;
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "serde")]
fn emit(cli: &Cli, report: &BenchmarkReport) -> std::io::Result<()> {
    if cli.json {
        return JsonReportSink::new(std::io::stdout()).emit(report);
    }
    TextReportSink::stdout().emit(report)
}

#[cfg(not(feature = "serde"))]
fn emit(_cli: &Cli, report: &BenchmarkReport) -> std::io::Result<()> {
    TextReportSink::stdout().emit(report)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = BenchmarkRunner::new(cli.config())?.run()?;
    emit(&cli, &report)?;
    Ok(())
}
