/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: BackendHealth,
}

/// Whether directives can reach the device backend at all
#[derive(Debug, Serialize)]
pub struct BackendHealth {
    pub url: String,
    pub usable: bool,
}

/// GET /api/health - Reports whether the configured backend URL is usable.
///
/// No request is sent to the backend; an unusable URL means every directive
/// would be dropped, so the skill reports itself unavailable.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let usable = match state.handler.backend() {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Backend URL is not usable: {}", e);
            false
        }
    };

    let (code, status) = if usable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend: BackendHealth {
            url: state.handler.api_config().url.clone(),
            usable,
        },
    };

    (code, Json(response))
}
