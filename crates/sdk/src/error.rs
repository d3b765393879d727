//! SDK Error Types

use problemdesk_core::AppError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            SdkError::Connection(e.to_string())
        } else if e.is_timeout() {
            SdkError::Transport(format!("Request timed out: {}", e))
        } else if e.is_builder() {
            SdkError::InvalidUrl(e.to_string())
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}

impl From<SdkError> for AppError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::Status { status: 404, body } => AppError::NotFound(body),
            SdkError::Serialization(err) => AppError::Serialization(err),
            SdkError::InvalidUrl(msg) => AppError::Config(format!("Invalid API URL: {}", msg)),
            other => AppError::Gateway(other.to_string()),
        }
    }
}
