//! Binary entrypoint for the analyzer HTTP service.

use std::sync::Arc;

use analyzer_service::{logging, AppState, ServiceConfig};
use log_analyzer::thresholds::{RESPONSE_TIME_THRESHOLD_MS, TEMPERATURE_THRESHOLD_C};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = ServiceConfig::from_env()?;
  logging::init_tracing(&config)?;

  let state = Arc::new(AppState::default());
  let app = analyzer_service::app(state, config.max_concurrent_requests);

  let addr = config.socket_addr();
  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!(
    %addr,
    max_concurrent_requests = config.max_concurrent_requests,
    response_time_threshold_ms = RESPONSE_TIME_THRESHOLD_MS,
    temperature_threshold_c = TEMPERATURE_THRESHOLD_C,
    "log analyzer listening",
  );

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("log analyzer stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to install Ctrl-C handler");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
    () = terminate => tracing::info!("received SIGTERM, shutting down"),
  }
}
