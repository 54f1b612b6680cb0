//! Fixed alerting thresholds.

/// Response times strictly above this trigger an alert (ms).
pub const RESPONSE_TIME_THRESHOLD_MS: i64 = 2000;

/// Temperatures strictly above this trigger an alert (°C).
pub const TEMPERATURE_THRESHOLD_C: f64 = 80.0;

/// Exact, case-sensitive level that triggers an alert.
pub const ERROR_LEVEL: &str = "ERROR";
