//! Threshold rules. Each rule yields at most one alert string.

use crate::thresholds::{ERROR_LEVEL, RESPONSE_TIME_THRESHOLD_MS, TEMPERATURE_THRESHOLD_C};
use crate::types::LogRecord;

pub type Rule = fn(&LogRecord) -> Option<String>;

/// Evaluation order; alerts come out in this order.
pub const RULES: [Rule; 3] = [error_level, response_time, temperature];

pub fn error_level(record: &LogRecord) -> Option<String> {
  if record.level == ERROR_LEVEL {
    Some(format!("Error detected: {}", record.message))
  } else {
    None
  }
}

pub fn response_time(record: &LogRecord) -> Option<String> {
  if record.response_time > RESPONSE_TIME_THRESHOLD_MS {
    Some(format!(
      "High response time: {}ms (threshold: {}ms)",
      record.response_time, RESPONSE_TIME_THRESHOLD_MS
    ))
  } else {
    None
  }
}

/// Missing temperature never fires; neither does NaN.
pub fn temperature(record: &LogRecord) -> Option<String> {
  match record.temperature {
    Some(t) if t > TEMPERATURE_THRESHOLD_C => Some(format!(
      "High temperature: {:.1}°C (threshold: {:.1}°C)",
      t, TEMPERATURE_THRESHOLD_C
    )),
    _ => None,
  }
}
