//! Per-client request configuration

use std::time::Duration;

/// Configuration applied to every request a client issues.
///
/// All fields are optional; unset fields fall back to the crate defaults
/// ([`crate::DEFAULT_BASE_URL`], [`crate::DEFAULT_API_VERSION`], no timeout,
/// no caller tag). Immutable once the client is built.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Base URL for the API
    pub base_url: Option<String>,

    /// API version path segment (e.g. `v1beta`)
    pub api_version: Option<String>,

    /// Per-call deadline. When set, an elapsed deadline aborts the in-flight
    /// request and the call fails with a transport error. A zero duration
    /// aborts immediately.
    pub timeout: Option<Duration>,

    /// Caller-supplied tag prefixed to the `x-goog-api-client` header
    pub api_client: Option<String>,
}

impl RequestOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API version path segment.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the caller tag for the client-identifier header.
    pub fn with_api_client(mut self, api_client: impl Into<String>) -> Self {
        self.api_client = Some(api_client.into());
        self
    }
}
