//! Decode raw JSON into a `LogRecord`.

use crate::error::AnalyzerError;
use crate::types::LogRecord;

pub fn decode_record(bytes: &[u8]) -> Result<LogRecord, AnalyzerError> {
  Ok(serde_json::from_slice(bytes)?)
}

pub fn decode_record_str(s: &str) -> Result<LogRecord, AnalyzerError> {
  Ok(serde_json::from_str(s)?)
}
