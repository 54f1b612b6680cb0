//! HTTP error type. Every variant renders as `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log_analyzer::AnalyzerError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Body could not be decoded into a record. Client's fault.
  #[error("Invalid JSON: {0}")]
  InvalidJson(String),

  #[error("Method not allowed")]
  MethodNotAllowed,

  /// Anything on our side. Detail is logged, not returned.
  #[error("Internal error: {0}")]
  Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AnalyzerError> for ApiError {
  fn from(err: AnalyzerError) -> Self {
    match err {
      AnalyzerError::Decode(e) => Self::InvalidJson(e.to_string()),
      AnalyzerError::Io(e) => Self::Internal(e.to_string()),
    }
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
      Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let message = match &self {
      Self::Internal(detail) => {
        tracing::error!(error = %detail, "internal error");
        "Internal server error".to_string()
      }
      other => other.to_string(),
    };
    (self.status(), Json(json!({ "error": message }))).into_response()
  }
}
