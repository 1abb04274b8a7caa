// ============================================================================
// Basic Usage Example
// ============================================================================

use posit_dsp_bench::prelude::*;

fn main() {
    println!("=== Posit DSP Benchmark Example ===\n");

    // Run the full comparison with the reference parameters
    let config = BenchmarkConfig::reference().with_seed(42);
    let report = BenchmarkRunner::new(config)
        .expect("reference config is valid")
        .run()
        .expect("reference run succeeds");

    TextReportSink::stdout()
        .emit(&report)
        .expect("stdout is writable");

    // Drive the stages by hand for a single representation
    println!("\n=== Manual posit pipeline ===");
    let generator = SineGenerator::new(5.0, 100.0).unwrap();
    let filter = MovingAverage::new(10).unwrap();

    let clean: Signal<Posit16> = generator.generate(20);
    let mut noisy = clean.clone();
    NoiseInjector::new(0.005, 7).unwrap().add_noise(&mut noisy);
    let filtered = filter.apply(&noisy);

    for i in 0..clean.len() {
        println!(
            "  n={:>2}  clean={:>9.5}  noisy={:>9.5}  filtered={:>9.5}",
            i,
            clean[i].to_f64(),
            noisy[i].to_f64(),
            filtered[i].to_f64()
        );
    }

    let reference = clean.to_comparable();
    let processed = filtered.to_comparable();
    println!(
        "\nMSE={:e}  max abs error={:e}",
        mse(&reference, &processed).unwrap(),
        max_abs_error(&reference, &processed).unwrap()
    );

    // Sliding summation trades newest-first ordering for O(N)
    println!("\n=== Naive vs sliding summation (posit) ===");
    let sliding = MovingAverage::with_summation(10, SummationOrder::Sliding).unwrap();
    let fast = sliding.apply(&noisy);
    let differing = filtered
        .iter()
        .zip(fast.iter())
        .filter(|(a, b)| a != b)
        .count();
    println!("{} of {} outputs differ in rounding", differing, filtered.len());

    // Settings where smoothing beats the raw noisy signal
    println!("\n=== Smoothing demo ===");
    let demo = BenchmarkRunner::new(BenchmarkConfig::smoothing_demo().with_seed(42))
        .unwrap()
        .run()
        .unwrap();
    for m in [&demo.float, &demo.posit] {
        println!(
            "  {}: noisy SNR {:.2} dB -> filtered SNR {:.2} dB",
            m.representation, m.noisy_snr_db, m.filtered_snr_db
        );
    }

    println!("\n=== Example Complete ===");
}
