//! HTTP layer: request targets, multipart encoding, and the transport seam

pub use request::{Operation, RequestTarget};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub(crate) mod multipart;
mod request;
mod transport;

pub(crate) use request::request_headers;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
