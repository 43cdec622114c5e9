//! Main client for the Files API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::RequestOptions,
    error::{Error, Result},
    http::{HeaderMap, HttpRequest, HttpResponse, Operation, ReqwestTransport, RequestTarget, Transport},
    resources::Files,
};

/// Client for the Generative Language Files API.
///
/// Holds the credential, per-client [`RequestOptions`] and the injected
/// [`Transport`]. Cheap to clone; clones share the same inner state.
///
/// # Example
///
/// ```rust,no_run
/// use genai_files::Client;
///
/// let client = Client::new("your-api-key").expect("non-empty API key");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

struct ClientInner {
    /// API key, threaded explicitly into every call
    api_key: SecretString,
    /// Request configuration, immutable after build
    options: RequestOptions,
    /// Injected HTTP capability
    transport: Arc<dyn Transport>,

    // Lazy-initialized resources
    files: OnceLock<Files>,
}

impl Client {
    /// Create a client with an API key and default options.
    ///
    /// Fails with [`Error::Validation`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Access the files resource.
    pub fn files(&self) -> &Files {
        self.inner.files.get_or_init(|| Files::new(self.clone()))
    }

    /// Build the request target for an operation from this client's options.
    pub(crate) fn target(&self, operation: Operation) -> Result<RequestTarget> {
        RequestTarget::new(operation, &self.inner.options)
    }

    /// Assemble the headers every call carries.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        crate::http::request_headers(self.inner.api_key.expose_secret(), &self.inner.options)
    }

    /// Execute one request and normalize the outcome.
    ///
    /// A non-success status becomes [`Error::Server`]; transport failures
    /// arrive from the transport already shaped as [`Error::Transport`].
    pub(crate) async fn send(
        &self,
        target: RequestTarget,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let request = HttpRequest {
            method: target.method(),
            url: target.as_str().to_string(),
            headers,
            body,
            timeout: self.inner.options.timeout,
        };
        let url = request.url.clone();

        tracing::debug!(method = %request.method, url = %url, "sending files request");
        let response = self.inner.transport.execute(request).await?;

        if !response.is_success() {
            tracing::warn!(status = %response.status, url = %url, "files request failed");
            return Err(Error::from_response(
                &url,
                response.status.as_u16(),
                response.status_text(),
                &response.body,
            ));
        }
        Ok(response)
    }
}

/// Builder for a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    options: RequestOptions,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Set the API key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    /// Set the API version path segment.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.options.api_version = Some(api_version.into());
        self
    }

    /// Set the per-call deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Set the caller tag prefixed to the client-identifier header.
    pub fn api_client(mut self, api_client: impl Into<String>) -> Self {
        self.options.api_client = Some(api_client.into());
        self
    }

    /// Replace the whole option set at once.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Inject a custom transport (used by tests to substitute the HTTP stack).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Validation("API key must be a non-empty string".into()))?;

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        Ok(Client {
            inner: Arc::new(ClientInner {
                api_key: SecretString::new(api_key.into_boxed_str()),
                options: self.options,
                transport,
                files: OnceLock::new(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("test-key").unwrap();
        let _ = client.files();
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(Client::new("").unwrap_err().is_validation());
        assert!(Client::builder().build().unwrap_err().is_validation());
    }

    #[test]
    fn test_client_clone_shares_state() {
        let client1 = Client::builder()
            .api_key("test-key")
            .base_url("https://example.com")
            .build()
            .unwrap();
        let client2 = client1.clone();

        let _ = client1.files();
        let _ = client2.files();
        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
    }

    #[test]
    fn test_builder_options() {
        let client = Client::builder()
            .api_key("test-key")
            .base_url("https://example.com")
            .api_version("v1")
            .timeout(Duration::from_secs(5))
            .api_client("my-app/1.0")
            .build()
            .unwrap();

        let target = client.target(crate::http::Operation::Upload).unwrap();
        assert_eq!(target.as_str(), "https://example.com/upload/v1/files");

        let headers = client.headers().unwrap();
        assert_eq!(headers.get("x-goog-api-key").unwrap().to_str().unwrap(), "test-key");
        assert_eq!(
            headers.get("x-goog-api-client").unwrap().to_str().unwrap(),
            format!("my-app/1.0 genai-rs/{}", crate::VERSION)
        );
    }
}
