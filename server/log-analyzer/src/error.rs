//! Error types for decoding records and running the stream binary.
//!
//! `analyze` itself cannot fail; these only cover the edges around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
  /// The caller sent something that is not a valid record.
  #[error("invalid JSON: {0}")]
  Decode(#[from] serde_json::Error),

  /// Reading or writing the record stream failed.
  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl AnalyzerError {
  /// True when the fault lies with the input, not with this process.
  pub fn is_client_error(&self) -> bool {
    matches!(self, Self::Decode(_))
  }
}
