//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServiceConfig};

/// Install the global subscriber. Call once, before anything logs.
///
/// `RUST_LOG` wins over `config.log_level` when set.
pub fn init_tracing(config: &ServiceConfig) -> Result<()> {
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

  let registry = tracing_subscriber::registry().with(env_filter);
  match config.log_format {
    LogFormat::Json => registry
      .with(tracing_subscriber::fmt::layer().json())
      .try_init(),
    LogFormat::Pretty => registry
      .with(tracing_subscriber::fmt::layer().pretty())
      .try_init(),
  }
  .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))
}
