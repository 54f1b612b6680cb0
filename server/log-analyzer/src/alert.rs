//! Alert dispatch: hands each alert of a result to a sink.
//!
//! Kept apart from `analyze` so the analyzer stays pure. Callers decide
//! whether and where alerts go.

use crate::types::AnalysisResult;

/// Receives one alert at a time.
pub trait AlertSink {
  fn emit(&self, device_id: &str, alert: &str);
}

impl<F> AlertSink for F
where
  F: Fn(&str, &str),
{
  fn emit(&self, device_id: &str, alert: &str) {
    self(device_id, alert)
  }
}

/// Emits alerts as `warn` events on the current tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
  fn emit(&self, device_id: &str, alert: &str) {
    tracing::warn!(device_id, alert, "{}", alert_line(device_id, alert));
  }
}

pub fn alert_line(device_id: &str, alert: &str) -> String {
  format!("[ALERT] Device: {} - {}", device_id, alert)
}

/// Send every alert of `result` to `sink`, in order. Returns how many were sent.
pub fn dispatch(result: &AnalysisResult, sink: &dyn AlertSink) -> usize {
  for alert in &result.alerts {
    sink.emit(&result.device_id, alert);
  }
  result.alerts.len()
}
