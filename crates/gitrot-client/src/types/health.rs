//! Service health types

use serde::{Deserialize, Serialize};

/// Response of the backend's `GET /health` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Health state, "healthy" when all is well
    pub status: String,

    /// ISO-8601 timestamp of the check
    #[serde(default)]
    pub timestamp: String,

    /// Service name (e.g. "GitRot FastAPI")
    #[serde(default)]
    pub service: String,

    /// Backend version string
    #[serde(default)]
    pub version: String,

    /// Request metrics as reported by the backend; shape varies by version
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metrics: serde_json::Value,
}

impl HealthStatus {
    /// Whether the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
