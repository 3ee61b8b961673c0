use thiserror::Error;

use crate::event::InvalidUriError;

/// Reasons a message is rejected before any deletion is attempted.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("invalid JSON message: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("missing required key in message: {0}")]
    MissingRequiredField(&'static str),
    #[error("invalid image URI {uri:?}: {source}")]
    InvalidImageUri {
        uri: String,
        source: InvalidUriError,
    },
}
