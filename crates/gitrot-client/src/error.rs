//! Error types for the GitRot client
//!
//! This module provides the error hierarchy for everything the client can
//! fail at: transport, backend rejections, local validation, and the
//! selection store, following Rust idioms with the `thiserror` crate.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a GitRot client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the GitRot client.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend returned a non-success HTTP status.
    ///
    /// The message is extracted from the response body when the backend
    /// sent one (`detail`, `message`, or `error_message` fields), otherwise
    /// it falls back to the raw body text.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the backend
        message: String,
    },

    /// Failed to deserialize a backend response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Model catalog failed its consistency checks.
    #[error("Invalid model catalog: {0}")]
    Catalog(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// The GitRot backend reports errors in a few shapes: FastAPI's
    /// `{"detail": ...}` (a string, or a list for validation errors), the
    /// generation envelope's `{"error_message": ...}`, and the occasional
    /// `{"message": ...}`. All of them collapse into [`Error::Api`].
    pub fn from_response(status: u16, body: &str) -> Self {
        Error::Api {
            status,
            message: extract_message(status, body),
        }
    }

    /// HTTP status code, if this error came from a backend response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the most useful human-readable message out of an error body.
fn extract_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
        message: Option<String>,
        error_message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            return match detail {
                serde_json::Value::String(s) => s,
                // FastAPI validation errors arrive as a list of objects
                other => other.to_string(),
            };
        }
        if let Some(message) = parsed.message {
            return message;
        }
        if let Some(error_message) = parsed.error_message {
            return error_message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP error: Status {}", status)
    } else {
        trimmed.to_string()
    }
}
