/// Skill error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use smarthome_api_client::ApiClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkillError>;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Backend client error: {0}")]
    Client(#[from] ApiClientError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for SkillError {
    fn from(err: config::ConfigError) -> Self {
        SkillError::Config(err.to_string())
    }
}

impl IntoResponse for SkillError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            SkillError::Decode(ref e) => {
                tracing::warn!("Undecodable directive: {}", e);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            SkillError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            SkillError::Client(ref e) => {
                tracing::error!("Backend client error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Backend client error".to_string(),
                )
            }
            SkillError::Encode(ref e) => {
                tracing::error!("Encode error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            SkillError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
