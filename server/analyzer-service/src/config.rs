//! Service configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("{var}: invalid value {value:?}: {reason}")]
  Invalid {
    var: &'static str,
    value: String,
    reason: String,
  },
}

impl ConfigError {
  fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
    Self::Invalid {
      var,
      value: value.to_string(),
      reason: reason.into(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  /// JSON lines, for log shippers.
  Json,
  /// Human-readable, for local runs.
  Pretty,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "json" => Ok(Self::Json),
      "pretty" => Ok(Self::Pretty),
      _ => Err("expected 'json' or 'pretty'".to_string()),
    }
  }
}

/// Runtime settings for the HTTP service. Alert thresholds are not here;
/// they are fixed in `log_analyzer::thresholds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
  pub host: IpAddr,
  pub port: u16,
  /// Requests beyond this many in flight wait for a free slot.
  pub max_concurrent_requests: usize,
  /// Default filter when `RUST_LOG` is unset.
  pub log_level: String,
  pub log_format: LogFormat,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      host: IpAddr::from([0, 0, 0, 0]),
      port: 8080,
      max_concurrent_requests: 100,
      log_level: "info".to_string(),
      log_format: LogFormat::Pretty,
    }
  }
}

impl ServiceConfig {
  /// Load from the process environment.
  ///
  /// | Env Var                   | Default   |
  /// |---------------------------|-----------|
  /// | `HOST`                    | `0.0.0.0` |
  /// | `PORT`                    | `8080`    |
  /// | `MAX_CONCURRENT_REQUESTS` | `100`     |
  /// | `LOG_LEVEL`               | `info`    |
  /// | `LOG_FORMAT`              | `pretty`  |
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Load using `lookup` in place of the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(v) = lookup("HOST") {
      config.host = v
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::invalid("HOST", &v, e.to_string()))?;
    }
    if let Some(v) = lookup("PORT") {
      config.port = v
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::invalid("PORT", &v, e.to_string()))?;
    }
    if let Some(v) = lookup("MAX_CONCURRENT_REQUESTS") {
      let n: usize = v.parse().map_err(|e: std::num::ParseIntError| {
        ConfigError::invalid("MAX_CONCURRENT_REQUESTS", &v, e.to_string())
      })?;
      if n == 0 {
        return Err(ConfigError::invalid(
          "MAX_CONCURRENT_REQUESTS",
          &v,
          "must be at least 1",
        ));
      }
      config.max_concurrent_requests = n;
    }
    if let Some(v) = lookup("LOG_LEVEL") {
      if v.trim().is_empty() {
        return Err(ConfigError::invalid("LOG_LEVEL", &v, "must not be empty"));
      }
      config.log_level = v;
    }
    if let Some(v) = lookup("LOG_FORMAT") {
      config.log_format = v
        .parse()
        .map_err(|reason: String| ConfigError::invalid("LOG_FORMAT", &v, reason))?;
    }

    Ok(config)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}
