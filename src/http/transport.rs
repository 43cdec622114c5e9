//! Pluggable HTTP transport
//!
//! The client depends on the [`Transport`] trait rather than a concrete HTTP
//! stack, so tests can substitute a fake and the default `reqwest`-backed
//! implementation stays swappable.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, Result};

/// A single outbound HTTP request, fully assembled by the caller.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Complete header set
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole call; elapsing aborts the in-flight request
    pub timeout: Option<Duration>,
}

/// Raw response as produced by a transport.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw body bytes
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Canonical status text for the status code (e.g. "Not Found").
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Serialization)
    }
}

/// Capability for executing one HTTP request.
///
/// Implementations must surface every pre-response failure (connection,
/// DNS, elapsed deadline) as [`Error::Transport`]; status-based error
/// normalization happens above this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url;

        let mut req = self
            .client
            .request(request.method, &url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        // Timeout is the only cancellation mechanism: arm a deadline around
        // the in-flight request and abort when it elapses.
        let outcome = match request.timeout {
            Some(limit) => match tokio::time::timeout(limit, req.send()).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    return Err(Error::Transport {
                        url,
                        message: format!("request aborted after {limit:?}"),
                        source: None,
                    })
                }
            },
            None => req.send().await,
        };

        let response = outcome.map_err(|e| Error::Transport {
            url: url.clone(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| Error::Transport {
            url: url.clone(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json() {
        let response = HttpResponse {
            status: StatusCode::OK,
            body: Bytes::from_static(br#"{"name":"files/abc"}"#),
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["name"], "files/abc");
    }

    #[test]
    fn test_response_json_failure() {
        let response = HttpResponse {
            status: StatusCode::OK,
            body: Bytes::from_static(b"not json"),
        };
        let result: Result<serde_json::Value> = response.json();
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_status_text() {
        let response = HttpResponse {
            status: StatusCode::NOT_FOUND,
            body: Bytes::new(),
        };
        assert_eq!(response.status_text(), "Not Found");
        assert!(!response.is_success());
    }
}
