//! HTTP request builder

use super::Response;
use crate::error::Result;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::time::Duration;
use url::Url;

/// Builder for HTTP requests.
///
/// Each request is sent exactly once. There is no retry or backoff layer;
/// errors propagate to the caller, which decides how to surface them.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(120),
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header.
    ///
    /// # Panics
    /// Panics if the header name or value contains invalid characters.
    /// For fallible header setting, use [`try_header`](Self::try_header) instead.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .unwrap_or_else(|e| panic!("Invalid header name '{}': {}", key_str, e));
        let value = value_str
            .parse::<HeaderValue>()
            .unwrap_or_else(|e| panic!("Invalid header value '{}': {}", value_str, e));

        self.headers.insert(key, value);
        self
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    ///
    /// This is the fallible version of [`header`](Self::header).
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn try_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str.parse::<HeaderName>().map_err(|e| {
            crate::error::Error::HttpClient(format!("Invalid header name '{}': {}", key_str, e))
        })?;
        let value = value_str.parse::<HeaderValue>().map_err(|e| {
            crate::error::Error::HttpClient(format!("Invalid header value '{}': {}", value_str, e))
        })?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Set the request body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a value to JSON and use it as the request body.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self.body(body))
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and get a response.
    ///
    /// Any HTTP status is returned as a [`Response`]; only transport-level
    /// problems (connection refused, timeout) produce an `Err`.
    pub async fn send(self) -> Result<Response> {
        let client = self.http_client.ok_or_else(|| {
            crate::error::Error::HttpClient("No HTTP client configured".to_string())
        })?;

        // Build reqwest request
        let mut req = client
            .request(self.method.clone(), self.url.as_str())
            .timeout(self.timeout);

        // Add headers
        for (key, value) in &self.headers {
            req = req.header(key, value);
        }

        // Add body if present
        if let Some(body) = self.body {
            req = req.body(body);
        }

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                let headers = resp.headers().clone();
                let body = resp
                    .bytes()
                    .await
                    .map_err(|e| crate::error::Error::Connection(e.to_string()))?
                    .to_vec();

                Ok(Response::new(status, headers, body))
            }
            Err(e) if e.is_timeout() => Err(crate::error::Error::Timeout(self.timeout)),
            Err(e) => Err(crate::error::Error::Connection(e.to_string())),
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}
