// ============================================================================
// Report Sink Interface
// Defines the contract for rendering benchmark results
// ============================================================================

use crate::analysis::NOISELESS_SNR_DB;
use crate::domain::{BenchmarkReport, RepresentationMetrics};
use std::io::{self, Write};

/// Consumer of finished benchmark reports.
/// Implementations can print, log, serialize, etc. The benchmark itself never
/// formats output.
pub trait ReportSink {
    /// Render a single report
    fn emit(&mut self, report: &BenchmarkReport) -> io::Result<()>;

    /// Render several reports in order
    fn emit_all(&mut self, reports: &[BenchmarkReport]) -> io::Result<()> {
        for report in reports {
            self.emit(report)?;
        }
        Ok(())
    }
}

/// No-op sink for testing
pub struct NoOpReportSink;

impl ReportSink for NoOpReportSink {
    fn emit(&mut self, _report: &BenchmarkReport) -> io::Result<()> {
        Ok(())
    }
}

/// Logging sink
pub struct LoggingReportSink;

impl LoggingReportSink {
    fn log_metrics(report: &BenchmarkReport, m: &RepresentationMetrics) {
        tracing::info!(
            run_id = %report.run_id.as_uuid(),
            representation = %m.representation,
            noisy_mse = m.noisy_mse,
            filtered_mse = m.filtered_mse,
            noisy_snr_db = m.noisy_snr_db,
            filtered_snr_db = m.filtered_snr_db,
            max_abs_error = m.max_abs_error,
            energy_deviation = m.energy_deviation,
            memory_bytes = m.memory.total_bytes,
            filter_micros = m.filter_elapsed.as_micros() as u64,
            "Benchmark metrics"
        );
    }
}

impl ReportSink for LoggingReportSink {
    fn emit(&mut self, report: &BenchmarkReport) -> io::Result<()> {
        Self::log_metrics(report, &report.float);
        Self::log_metrics(report, &report.posit);

        let memory = report.memory();
        tracing::info!(
            run_id = %report.run_id.as_uuid(),
            snr_ratio = report.snr_ratio(),
            memory_difference_bytes = memory.difference_bytes(),
            memory_ratio = memory.ratio(),
            energy_winner = %report.better_energy_conservation(),
            "Benchmark comparison"
        );
        Ok(())
    }
}

/// Human-readable table written to any `io::Write`
pub struct TextReportSink<W: Write> {
    writer: W,
}

impl<W: Write> TextReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn row(&mut self, label: &str, float: String, posit: String) -> io::Result<()> {
        writeln!(self.writer, "{:<22}{:>16}{:>16}", label, float, posit)
    }
}

impl TextReportSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn fmt_db(value: f64) -> String {
    if value == NOISELESS_SNR_DB {
        "noiseless".to_string()
    } else {
        format!("{:.4}", value)
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn emit(&mut self, report: &BenchmarkReport) -> io::Result<()> {
        let config = &report.config;
        let (f, p) = (&report.float, &report.posit);

        writeln!(
            self.writer,
            "run {} (seed {})",
            report.run_id.as_uuid(),
            report.seed
        )?;
        writeln!(
            self.writer,
            "signal: N={} f={} Hz fs={} Hz noise={} window={} ({:?} summation)",
            config.signal_length,
            config.frequency,
            config.sampling_rate,
            config.noise_level,
            config.window_size,
            config.summation
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{:<22}{:>16}{:>16}", "", "float", "posit")?;
        self.row(
            "filter time (us)",
            f.filter_elapsed.as_micros().to_string(),
            p.filter_elapsed.as_micros().to_string(),
        )?;
        self.row(
            "noisy MSE",
            format!("{:.6e}", f.noisy_mse),
            format!("{:.6e}", p.noisy_mse),
        )?;
        self.row(
            "filtered MSE",
            format!("{:.6e}", f.filtered_mse),
            format!("{:.6e}", p.filtered_mse),
        )?;
        self.row("noisy SNR (dB)", fmt_db(f.noisy_snr_db), fmt_db(p.noisy_snr_db))?;
        self.row(
            "filtered SNR (dB)",
            fmt_db(f.filtered_snr_db),
            fmt_db(p.filtered_snr_db),
        )?;
        self.row(
            "max abs error",
            format!("{:.6e}", f.max_abs_error),
            format!("{:.6e}", p.max_abs_error),
        )?;
        self.row(
            "energy deviation",
            format!("{:.6e}", f.energy_deviation),
            format!("{:.6e}", p.energy_deviation),
        )?;
        self.row(
            "memory (bytes)",
            f.memory.total_bytes.to_string(),
            p.memory.total_bytes.to_string(),
        )?;
        writeln!(self.writer)?;

        let memory = report.memory();
        writeln!(self.writer, "SNR ratio posit/float: {:.4}", report.snr_ratio())?;
        writeln!(
            self.writer,
            "memory difference: {} bytes (float/posit ratio {:.4})",
            memory.difference_bytes(),
            memory.ratio()
        )?;
        writeln!(
            self.writer,
            "energy conserved better by: {}",
            report.better_energy_conservation()
        )?;
        self.writer.flush()
    }
}

/// Pretty-printed JSON, one document per report
#[cfg(feature = "serde")]
pub struct JsonReportSink<W: Write> {
    writer: W,
}

#[cfg(feature = "serde")]
impl<W: Write> JsonReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "serde")]
impl<W: Write> ReportSink for JsonReportSink<W> {
    fn emit(&mut self, report: &BenchmarkReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BenchmarkConfig;
    use crate::engine::BenchmarkRunner;

    fn sample_report() -> BenchmarkReport {
        BenchmarkRunner::new(BenchmarkConfig::reference().with_seed(42))
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn test_noop_sink() {
        let report = sample_report();
        assert!(NoOpReportSink.emit(&report).is_ok());
    }

    #[test]
    fn test_logging_sink() {
        let report = sample_report();
        assert!(LoggingReportSink.emit_all(&[report.clone(), report]).is_ok());
    }

    #[test]
    fn test_text_sink_renders_both_columns() {
        let report = sample_report();
        let mut sink = TextReportSink::new(Vec::new());
        sink.emit(&report).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("seed 42"));
        assert!(text.contains("float"));
        assert!(text.contains("posit"));
        assert!(text.contains("filtered MSE"));
        assert!(text.contains("energy conserved better by:"));
        assert!(text.contains(&format!(
            "memory difference: {} bytes",
            report.memory().difference_bytes()
        )));
    }

    #[test]
    fn test_noiseless_snr_is_labelled() {
        assert_eq!(fmt_db(NOISELESS_SNR_DB), "noiseless");
        assert_eq!(fmt_db(12.5), "12.5000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_sink_roundtrip() {
        let report = sample_report();
        let mut sink = JsonReportSink::new(Vec::new());
        sink.emit(&report).unwrap();

        let parsed: BenchmarkReport = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(parsed.seed, report.seed);
        assert!((parsed.float.filtered_mse - report.float.filtered_mse).abs() < 1e-12);
        assert_eq!(parsed.config, report.config);
    }
}
