//! Files resource: upload, list, get and delete
//!
//! # Example
//!
//! ```rust,no_run
//! # use genai_files::{Client, FileMetadata, ListFilesParams};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-api-key")?;
//!
//! let uploaded = client.files()
//!     .upload("notes.txt", FileMetadata::new("text/plain").display_name("notes"))
//!     .await?;
//!
//! let page = client.files().list(ListFilesParams::new().page_size(20)).await?;
//! let file = client.files().get(&uploaded.file.name).await?;
//! client.files().delete(&file.name).await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use http::header::CONTENT_TYPE;
use http::HeaderValue;

use crate::{
    client::Client,
    error::{Error, Result},
    http::{multipart, Operation},
    types::{File, FileMetadata, ListFilesParams, ListFilesResponse, UploadFileResponse, UploadMetadata},
};

/// Files resource, obtained through [`Client::files`].
pub struct Files {
    client: Client,
}

impl Files {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a file read from the local filesystem.
    pub async fn upload(
        &self,
        path: impl AsRef<Path>,
        metadata: FileMetadata,
    ) -> Result<UploadFileResponse> {
        let content = tokio::fs::read(path).await?;
        self.upload_bytes(content, metadata).await
    }

    /// Upload raw bytes.
    ///
    /// Serializes the normalized metadata and the content into a single
    /// `multipart/related` body and POSTs it to the upload endpoint.
    pub async fn upload_bytes(
        &self,
        content: impl Into<Vec<u8>>,
        metadata: FileMetadata,
    ) -> Result<UploadFileResponse> {
        let upload_metadata = UploadMetadata::from_input(&metadata)?;
        let target = self.client.target(Operation::Upload)?;

        let metadata_json = serde_json::to_string(&serde_json::json!({ "file": upload_metadata }))?;
        let body = multipart::encode(&metadata_json, &metadata.mime_type, &content.into());

        let mut headers = self.client.headers()?;
        headers.insert("x-goog-upload-protocol", HeaderValue::from_static("multipart"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&format!("multipart/related; boundary={}", body.boundary))
                .map_err(|_| Error::Validation("mime type produced an invalid content-type header".into()))?,
        );

        self.client.send(target, headers, Some(body.bytes)).await?.json()
    }

    /// List uploaded files, one page at a time.
    pub async fn list(&self, params: ListFilesParams) -> Result<ListFilesResponse> {
        let mut target = self.client.target(Operation::List)?;
        if let Some(page_size) = params.page_size {
            target.append_param("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &params.page_token {
            target.append_param("pageToken", page_token);
        }
        let headers = self.client.headers()?;
        self.client.send(target, headers, None).await?.json()
    }

    /// Get metadata for the file with the given identifier.
    ///
    /// Accepts either the canonical `files/<name>` form or a bare `<name>`.
    pub async fn get(&self, file_id: &str) -> Result<File> {
        let mut target = self.client.target(Operation::Get)?;
        target.append_path(parse_file_id(file_id)?);
        let headers = self.client.headers()?;
        self.client.send(target, headers, None).await?.json()
    }

    /// Delete the file with the given identifier.
    pub async fn delete(&self, file_id: &str) -> Result<()> {
        let mut target = self.client.target(Operation::Delete)?;
        target.append_path(parse_file_id(file_id)?);
        let headers = self.client.headers()?;
        self.client.send(target, headers, None).await?;
        Ok(())
    }
}

/// Resolve a file identifier to the path suffix: the `files/` prefix is
/// stripped, a bare name passes through, and an empty identifier fails before
/// any network call.
fn parse_file_id(file_id: &str) -> Result<&str> {
    if let Some(stripped) = file_id.strip_prefix("files/") {
        return Ok(stripped);
    }
    if file_id.is_empty() {
        return Err(Error::Validation(format!(
            "invalid file id \"{file_id}\"; must be in the format \"files/<name>\" or \"<name>\""
        )));
    }
    Ok(file_id)
}
