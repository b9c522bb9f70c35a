/// Core error types for the smart home skill
use thiserror::Error;

/// Result type alias using `SmartHomeError`
pub type Result<T> = std::result::Result<T, SmartHomeError>;

/// Core error type for the smart home skill
#[derive(Error, Debug)]
pub enum SmartHomeError {
    /// The backend answered with a non-success status
    #[error("Backend error ({status}): {message}")]
    Backend {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The backend could not be reached or the transfer broke off
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SmartHomeError {
    /// Create a backend status error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
