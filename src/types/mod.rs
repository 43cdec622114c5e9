//! Public types: file resources and the UI boundary contract

pub use files::{File, FileMetadata, FileState, ListFilesParams, ListFilesResponse, UploadFileResponse};
pub use message::{PromptReply, PromptRequest};

pub(crate) use files::UploadMetadata;

mod files;
mod message;
