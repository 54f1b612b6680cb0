//! Log Analyzer: threshold-based classification of single log records.
//!
//! Pure and stateless: every call builds a fresh result, nothing is shared
//! between calls. Used by the stdin/stdout binary and the HTTP service.

pub mod alert;
pub mod decode;
pub mod error;
pub mod rules;
pub mod stream;
pub mod thresholds;
pub mod types;

pub use alert::{dispatch, AlertSink, TracingSink};
pub use decode::{decode_record, decode_record_str};
pub use error::AnalyzerError;
pub use stream::{process_lines, StreamStats};
pub use types::{AnalysisResult, ErrorOutput, LogRecord, Status};

/// Run every rule against `record` and collect the alerts that fire.
pub fn analyze(record: &LogRecord) -> AnalysisResult {
  let alerts = rules::RULES
    .iter()
    .filter_map(|rule| rule(record))
    .collect();
  AnalysisResult::from_alerts(record.device_id.clone(), alerts)
}
