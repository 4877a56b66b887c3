//! HTTP response wrapper

use crate::error::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// A buffered HTTP response.
///
/// The body is fully read before this is constructed, so parsing is
/// synchronous and can be retried with different target types.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Create a new response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Response body as text (lossy UTF-8).
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the status indicates an error (non-2xx).
    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }

    /// Parse the body as JSON into `T`, treating non-2xx statuses as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-success statuses (with the message
    /// extracted from the error body), or [`Error::ResponseValidation`]
    /// when a success body does not deserialize into `T`.
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T> {
        if self.is_error() {
            return Err(Error::from_response(
                self.status.as_u16(),
                &self.body_text(),
            ));
        }

        serde_json::from_slice(&self.body).map_err(|e| {
            Error::ResponseValidation(format!(
                "failed to deserialize response body: {} (body: {})",
                e,
                self.body_text()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_parses_json() {
        #[derive(serde::Deserialize)]
        struct Health {
            status: String,
        }

        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            br#"{"status":"healthy"}"#.to_vec(),
        );

        assert!(response.is_success());
        let health: Health = response.parse_result().unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_error_status_becomes_api_error() {
        let response = Response::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            br#"{"detail":"Generation failed"}"#.to_vec(),
        );

        assert!(response.is_error());
        let err = response.parse_result::<serde_json::Value>().unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Generation failed");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_success_body_is_validation_error() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), b"not json".to_vec());

        let err = response
            .parse_result::<std::collections::HashMap<String, String>>()
            .unwrap_err();
        assert!(matches!(err, Error::ResponseValidation(_)));
    }

    #[test]
    fn test_body_text_lossy() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), vec![0xff, 0xfe]);
        // Invalid UTF-8 must not panic
        let _ = response.body_text();
    }
}
