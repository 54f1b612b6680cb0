//! Response bodies for the probe and discovery endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
  pub health: &'static str,
  pub analyze: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
  pub service: &'static str,
  pub version: &'static str,
  pub endpoints: Endpoints,
}
