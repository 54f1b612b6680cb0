//! Log Analyzer HTTP Service
//!
//! Thin transport over `log_analyzer`: decodes a record, analyzes it,
//! dispatches alerts and returns the result as JSON.

pub mod config;
pub mod error;
mod handlers;
pub mod logging;
mod state;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{LogFormat, ServiceConfig};
pub use error::ApiError;
pub use handlers::{analyze, health, method_not_allowed, root};
pub use state::AppState;

/// Build the router. At most `max_in_flight` analyze requests are handled at
/// once; the rest queue. Probe and discovery routes are not limited.
pub fn app(state: Arc<AppState>, max_in_flight: usize) -> Router {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    .route(
      "/analyze",
      post(analyze)
        .fallback(method_not_allowed)
        .layer(GlobalConcurrencyLimitLayer::new(max_in_flight)),
    )
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
