//! HTTP handlers for the analyzer service.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use log_analyzer::{analyze as analyze_record, decode_record, dispatch, AnalysisResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::types::{Endpoints, HealthResponse, ServiceInfo};

pub async fn health() -> Json<HealthResponse> {
  Json(HealthResponse { status: "healthy" })
}

pub async fn root() -> Json<ServiceInfo> {
  Json(ServiceInfo {
    service: "Log Analyzer",
    version: env!("CARGO_PKG_VERSION"),
    endpoints: Endpoints {
      health: "/health",
      analyze: "/analyze (POST)",
    },
  })
}

/// POST /analyze
///
/// The body is decoded here rather than through `Json<T>` so that decode
/// failures come back as our own 400 body regardless of content type.
pub async fn analyze(
  State(state): State<Arc<AppState>>,
  body: Bytes,
) -> ApiResult<Json<AnalysisResult>> {
  let start = Instant::now();

  let record = decode_record(&body).map_err(|e| {
    tracing::debug!(error = %e, "rejected request body");
    ApiError::from(e)
  })?;
  let result = analyze_record(&record);
  dispatch(&result, state.sink.as_ref());

  tracing::info!(
    device_id = %result.device_id,
    status = %result.status,
    alerts = result.alerts.len(),
    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
    "processed record",
  );

  Ok(Json(result))
}

pub async fn method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}
