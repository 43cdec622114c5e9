//! Boundary contract between a UI surface and the worker that owns the client
//!
//! A popup (or any embedding UI) sends a [`PromptRequest`] over its message
//! channel; the worker answers with a [`PromptReply`] carrying either the
//! generated text or an error string to render verbatim. Only the contract is
//! modeled here; the channel itself is the embedder's concern.

use serde::{Deserialize, Serialize};

/// A prompt forwarded from the UI surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// The user-typed prompt
    pub prompt: String,
}

impl PromptRequest {
    /// Wrap a prompt string.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }
}

/// Reply sent back to the UI surface: generated text or a display-ready error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptReply {
    /// The call succeeded
    Success {
        /// Generated text
        response: String,
    },
    /// The call failed
    Failure {
        /// Error message for the UI to display verbatim
        error: String,
    },
}

impl PromptReply {
    /// Build a success reply.
    pub fn success(response: impl Into<String>) -> Self {
        PromptReply::Success { response: response.into() }
    }

    /// Build a failure reply.
    pub fn failure(error: impl Into<String>) -> Self {
        PromptReply::Failure { error: error.into() }
    }
}

impl From<crate::error::Result<String>> for PromptReply {
    fn from(result: crate::error::Result<String>) -> Self {
        match result {
            Ok(response) => PromptReply::Success { response },
            Err(error) => PromptReply::Failure { error: error.to_string() },
        }
    }
}
