//! Request target construction for the files endpoint

use http::{HeaderMap, HeaderValue, Method};
use url::Url;

use crate::{
    config::RequestOptions,
    error::{Error, Result},
    CLIENT_LOG_HEADER, DEFAULT_API_VERSION, DEFAULT_BASE_URL, VERSION,
};

/// The four supported file operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Upload a file (multipart POST)
    Upload,
    /// List uploaded files
    List,
    /// Get metadata for one file
    Get,
    /// Delete one file
    Delete,
}

impl Operation {
    /// HTTP method this operation maps to.
    pub fn method(self) -> Method {
        match self {
            Operation::Upload => Method::POST,
            Operation::List | Operation::Get => Method::GET,
            Operation::Delete => Method::DELETE,
        }
    }
}

/// A fully-qualified URL for one files-API call.
///
/// The URL is determined entirely by the operation and the client's
/// [`RequestOptions`]; the only mutation points are explicit
/// [`append_path`](RequestTarget::append_path) and
/// [`append_param`](RequestTarget::append_param) calls made before dispatch.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    operation: Operation,
    url: Url,
}

impl RequestTarget {
    /// Build the base URL for an operation.
    ///
    /// Layout: `<base>` + (`/upload` for uploads) + `/<version>/files`. The
    /// base endpoint is concatenated as given, without trailing-slash
    /// normalization.
    pub fn new(operation: Operation, options: &RequestOptions) -> Result<Self> {
        let base_url = options.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let api_version = options.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION);

        let mut initial = base_url.to_string();
        if operation == Operation::Upload {
            initial.push_str("/upload");
        }
        initial.push('/');
        initial.push_str(api_version);
        initial.push_str("/files");

        let url = Url::parse(&initial)
            .map_err(|e| Error::Validation(format!("invalid base URL \"{base_url}\": {e}")))?;

        Ok(Self { operation, url })
    }

    /// Append `/<segment>` to the current path.
    pub fn append_path(&mut self, segment: &str) {
        let path = format!("{}/{}", self.url.path(), segment);
        self.url.set_path(&path);
    }

    /// Append a query parameter. Pairs are kept in call order and duplicate
    /// keys are retained.
    pub fn append_param(&mut self, key: &str, value: &str) {
        self.url.query_pairs_mut().append_pair(key, value);
    }

    /// The operation this target was built for.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The HTTP method for this target.
    pub fn method(&self) -> Method {
        self.operation.method()
    }

    /// The URL as a string.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Compose the `x-goog-api-client` value: an optional caller tag followed by
/// the product tag and crate version.
pub(crate) fn client_header(options: &RequestOptions) -> String {
    let mut parts = Vec::new();
    if let Some(tag) = &options.api_client {
        parts.push(tag.as_str());
    }
    let product = format!("{CLIENT_LOG_HEADER}/{VERSION}");
    parts.push(product.as_str());
    parts.join(" ")
}

/// Assemble the header set every files-API call carries: the
/// client-identifier tag and the API-key credential. Nothing else.
pub(crate) fn request_headers(api_key: &str, options: &RequestOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-client",
        HeaderValue::from_str(&client_header(options)).map_err(|_| {
            Error::Validation("api_client tag contains characters not permitted in a header".into())
        })?,
    );
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).map_err(|_| {
            Error::Validation("API key contains characters not permitted in a header".into())
        })?,
    );
    Ok(headers)
}
