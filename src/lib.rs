//! # Generative Language Files API client
//!
//! An idiomatic Rust client for the Generative Language Files API, covering
//! the four file operations: upload, list, get and delete.
//!
//! The client threads an explicit API key through every call (no process-wide
//! credential), builds request URLs deterministically from its configuration,
//! and normalizes every failure into a single [`Error`] shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genai_files::{Client, FileMetadata, ListFilesParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let uploaded = client.files()
//!         .upload("notes.txt", FileMetadata::new("text/plain").display_name("notes"))
//!         .await?;
//!     println!("uploaded {}", uploaded.file.name);
//!
//!     let page = client.files().list(ListFilesParams::default()).await?;
//!     for file in page.files {
//!         println!("{} ({})", file.name, file.mime_type);
//!     }
//!
//!     client.files().delete(&uploaded.file.name).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::RequestOptions;
pub use error::{Error, Result};
pub use self::http::{Operation, RequestTarget, Transport};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// ```rust
/// use genai_files::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        types::{File, FileMetadata, FileState, ListFilesParams, PromptReply, PromptRequest},
        Client, Error, RequestOptions, Result,
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Product tag sent in the `x-goog-api-client` header
pub const CLIENT_LOG_HEADER: &str = "genai-rs";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "https://generativelanguage.googleapis.com");
        assert_eq!(DEFAULT_API_VERSION, "v1beta");
    }
}
