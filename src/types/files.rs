//! Types for the Files API
//!
//! Caller-facing metadata input, its normalized wire form, and the resource
//! types the server returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Metadata supplied by the caller when uploading a file.
///
/// Only the mime type is required. A bare resource `name` is normalized to
/// the canonical `files/<name>` form on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// MIME type of the content (required)
    pub mime_type: String,
    /// Human-readable display name
    pub display_name: Option<String>,
    /// Resource name; either `files/<name>` or a bare `<name>`
    pub name: Option<String>,
}

impl FileMetadata {
    /// Create metadata for the given mime type.
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            display_name: None,
            name: None,
        }
    }

    /// Set the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the resource name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Normalized wire form of upload metadata, serialized into the JSON part of
/// the multipart body as `{"file": <this>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadMetadata {
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UploadMetadata {
    /// Validate and normalize caller metadata.
    ///
    /// A missing mime type fails before any network call. A `name` without a
    /// `/` is given the canonical `files/` prefix.
    pub(crate) fn from_input(input: &FileMetadata) -> Result<Self> {
        if input.mime_type.is_empty() {
            return Err(Error::Validation("must provide a mimeType".into()));
        }
        let name = input.name.as_ref().map(|name| {
            if name.contains('/') {
                name.clone()
            } else {
                format!("files/{name}")
            }
        });
        Ok(Self {
            mime_type: input.mime_type.clone(),
            display_name: input.display_name.clone(),
            name,
        })
    }
}

/// Processing state of a [`File`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileState {
    /// Default value, used if the state is omitted
    StateUnspecified,
    /// Being processed; not yet usable for inference
    Processing,
    /// Processed and available for inference
    Active,
    /// Processing failed
    Failed,
}

/// A file stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Canonical resource name, `files/<id>`
    pub name: String,
    /// Display name given at upload time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// MIME type of the content
    pub mime_type: String,
    /// Content size in bytes (int64 carried as a string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    /// When the file will be deleted by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
    /// SHA-256 hash of the content, base64-encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_hash: Option<String>,
    /// URI for referencing this file in other API calls
    pub uri: String,
    /// Processing state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FileState>,
}

/// Response envelope for an upload call.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadFileResponse {
    /// The uploaded file
    pub file: File,
}

/// Parameters for listing files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilesParams {
    /// Maximum number of files per page
    pub page_size: Option<u32>,
    /// Continuation token from a previous page
    pub page_token: Option<String>,
}

impl ListFilesParams {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the continuation token.
    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }
}

/// One page of uploaded files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFilesResponse {
    /// Files on this page
    pub files: Vec<File>,
    /// Token for fetching the next page, absent on the last page
    pub next_page_token: Option<String>,
}
