//! Error types for the Files API client
//!
//! Every failure path converges to the [`Error`] enum: a tagged union
//! discriminated by variant rather than a class hierarchy, following Rust
//! idioms with the `thiserror` crate.

use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Files API client.
///
/// Three taxonomy kinds cover the request lifecycle: `Validation` for
/// malformed caller input detected before any network call, `Transport` for
/// network-level failures with no structured server response, and `Server`
/// for non-success HTTP responses. The remaining variants wrap ambient
/// serialization and I/O failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input, detected before any network call is attempted.
    #[error("Invalid request input: {0}")]
    Validation(String),

    /// Network-level failure: the transport failed before a response was
    /// obtained (connection refused, DNS failure, timeout-triggered abort).
    /// Carries no HTTP status.
    #[error("Error fetching from {url}: {message}")]
    Transport {
        /// URL the request was issued against
        url: String,
        /// Description of the underlying failure
        message: String,
        /// Original transport error, retained for its diagnostic trace
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-success HTTP status.
    #[error("Error fetching from {url}: [{status} {status_text}] {message}")]
    Server {
        /// URL the request was issued against
        url: String,
        /// HTTP status code
        status: u16,
        /// Canonical status text (e.g. "Not Found")
        status_text: String,
        /// Message extracted from the JSON error envelope, with any details
        /// appended in JSON-stringified form; empty if the body was unparsable
        message: String,
        /// Structured detail list from the error envelope, if present
        details: Option<Vec<serde_json::Value>>,
    },

    /// Failed to serialize a request payload or parse a response body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while reading upload content from the local filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `Server` error from a non-success HTTP response.
    ///
    /// Attempts to parse the standard `{error: {message, details?}}` envelope;
    /// when the body is unparsable the message stays empty and the error is
    /// described by status and status text alone.
    pub(crate) fn from_response(url: &str, status: u16, status_text: &str, body: &[u8]) -> Self {
        let mut message = String::new();
        let mut details = None;
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            message = envelope.error.message;
            if let Some(list) = envelope.error.details {
                if let Ok(rendered) = serde_json::to_string(&list) {
                    message.push(' ');
                    message.push_str(&rendered);
                }
                details = Some(list);
            }
        }
        Error::Server {
            url: url.to_string(),
            status,
            status_text: status_text.to_string(),
            message,
            details,
        }
    }

    /// HTTP status code, if this is a server-reported error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Whether this is a network-level failure with no server response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Whether this is a non-success HTTP response from the server.
    pub fn is_server(&self) -> bool {
        matches!(self, Error::Server { .. })
    }
}

// Wire shape of the server's error envelope. Tolerated-missing: any parse
// failure falls back to a status-only message.

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    details: Option<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_envelope() {
        let body = br#"{"error":{"message":"not found"}}"#;
        let error = Error::from_response("https://example.com/v1beta/files/x", 404, "Not Found", body);

        match &error {
            Error::Server { status, status_text, message, details, .. } => {
                assert_eq!(*status, 404);
                assert_eq!(status_text, "Not Found");
                assert_eq!(message, "not found");
                assert!(details.is_none());
            }
            other => panic!("expected Server error, got {other:?}"),
        }
        assert!(error.to_string().contains("[404 Not Found] not found"));
    }

    #[test]
    fn test_from_response_appends_details() {
        let body = br#"{"error":{"message":"quota","details":[{"reason":"RATE_LIMIT"}]}}"#;
        let error = Error::from_response("https://example.com", 429, "Too Many Requests", body);

        match &error {
            Error::Server { message, details, .. } => {
                assert!(message.starts_with("quota "));
                assert!(message.contains(r#"[{"reason":"RATE_LIMIT"}]"#));
                assert_eq!(details.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_unparsable_body() {
        let error = Error::from_response("https://example.com", 500, "Internal Server Error", b"<html>oops</html>");

        match &error {
            Error::Server { status, message, details, .. } => {
                assert_eq!(*status, 500);
                assert!(message.is_empty());
                assert!(details.is_none());
            }
            other => panic!("expected Server error, got {other:?}"),
        }
        assert!(error.to_string().contains("[500 Internal Server Error]"));
    }

    #[test]
    fn test_taxonomy_helpers() {
        let validation = Error::Validation("empty file id".into());
        assert!(validation.is_validation());
        assert_eq!(validation.status(), None);

        let transport = Error::Transport {
            url: "https://example.com".into(),
            message: "connection refused".into(),
            source: None,
        };
        assert!(transport.is_transport());
        assert_eq!(transport.status(), None);

        let server = Error::from_response("https://example.com", 404, "Not Found", b"{}");
        assert!(server.is_server());
        assert_eq!(server.status(), Some(404));
    }
}
