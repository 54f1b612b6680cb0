//! Shared, read-only handler state.

use std::sync::Arc;

use log_analyzer::{AlertSink, TracingSink};

pub struct AppState {
  /// Where alerts from analyzed records go.
  pub sink: Arc<dyn AlertSink + Send + Sync>,
}

impl AppState {
  pub fn new(sink: impl AlertSink + Send + Sync + 'static) -> Self {
    Self {
      sink: Arc::new(sink),
    }
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new(TracingSink)
  }
}
