//! Input/output types for the log analyzer (JSON contract with callers).

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Inbound record
// ---------------------------------------------------------------------------

/// One log record from a device. Every field is optional on the wire; unknown
/// fields are silently ignored and `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
  #[serde(default, deserialize_with = "null_as_default")]
  pub level: String,
  /// Milliseconds. Negative values are accepted as-is.
  #[serde(default, deserialize_with = "null_as_default")]
  pub response_time: i64,
  #[serde(default = "default_device_id", deserialize_with = "device_id_or_default")]
  pub device_id: String,
  /// Degrees Celsius; `None` when the device has no temperature sensor.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub temperature: Option<f64>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub message: String,
}

fn default_device_id() -> String {
  "unknown".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn device_id_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_device_id))
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
  Ok,
  Alert,
}

impl Status {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Ok => "OK",
      Self::Alert => "ALERT",
    }
  }
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Classification of one record. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
  pub status: Status,
  /// In rule order: level, response time, temperature.
  pub alerts: Vec<String>,
  pub device_id: String,
}

impl AnalysisResult {
  /// Status is derived from the alerts so the two can never disagree.
  pub fn from_alerts(device_id: String, alerts: Vec<String>) -> Self {
    let status = if alerts.is_empty() {
      Status::Ok
    } else {
      Status::Alert
    };
    Self {
      status,
      alerts,
      device_id,
    }
  }

  pub fn is_alert(&self) -> bool {
    self.status == Status::Alert
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for input lines that could not be decoded.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
