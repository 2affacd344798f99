//! Client-side error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`super::ApiClient`]
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Connection, TLS or timeout failure; no response was received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body could not be encoded or response body decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            ClientError::InvalidUrl(_) | ClientError::Json(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
