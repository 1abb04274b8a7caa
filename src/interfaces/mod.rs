// ============================================================================
// Interfaces Module
// Contains the seams to collaborators outside the benchmark core
// ============================================================================

mod report_sink;

pub use report_sink::{LoggingReportSink, NoOpReportSink, ReportSink, TextReportSink};

#[cfg(feature = "serde")]
pub use report_sink::JsonReportSink;
