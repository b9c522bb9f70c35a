//! Error types for the smart home API client.

use smarthome_core::SmartHomeError;
use thiserror::Error;

/// Errors that can occur when talking to the device backend.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid backend URL
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse backend response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiClientError>;

impl From<ApiClientError> for SmartHomeError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::ServerError { status, message } => Self::backend(status, message),
            ApiClientError::Request(e) => Self::network(e.to_string()),
            ApiClientError::InvalidUrl(msg) => Self::invalid_input(msg),
            ApiClientError::ParseError(msg) => Self::Other(msg),
        }
    }
}
