//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a LogRecord. Each non-blank line produces exactly one
//! output line, either:
//! - An AnalysisResult
//! - An ErrorOutput (when the line is not a valid record)
//!
//! Alerts are logged to stderr so stdout stays machine-readable. Only a
//! failing stdin/stdout ends the run early, with exit status 1.

use std::io;

use log_analyzer::{process_lines, TracingSink};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let out = io::BufWriter::new(stdout.lock());

  match process_lines(stdin.lock(), out, &TracingSink) {
    Ok(stats) => tracing::debug!(
      processed = stats.processed,
      alerted = stats.alerted,
      rejected = stats.rejected,
      "stdin closed",
    ),
    Err(e) => {
      tracing::error!(error = %e, "log-analyzer failed");
      std::process::exit(1);
    }
  }
}
