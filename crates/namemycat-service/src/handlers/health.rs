//! Health check handlers.
//!
//! `GET /health` answers without touching the database, so it reports that
//! the process is serving HTTP, not that PostgreSQL is reachable. A broken
//! database shows up on the home page as the default name instead.

use axum::Json;
use serde::Serialize;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "namemycat";

/// Health check response.
///
/// Serialized as `{"status":"ok","service":"namemycat","version":"0.1.0"}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process can answer requests.
    pub status: &'static str,
    /// Service name, used by the live tests to confirm they hit this service.
    pub service: &'static str,
    /// Crate version the binary was built from.
    pub version: &'static str,
}

impl HealthResponse {
    /// Response for a running service.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
