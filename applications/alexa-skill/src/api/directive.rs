/// Directive API route
use crate::{error::Result, state::AppState};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// POST /api/directive - Run one skill invocation
///
/// Dispatch failures are answered with the Alexa error event and status 200;
/// only an undecodable body is rejected at the HTTP level.
pub async fn handle_directive(State(app_state): State<AppState>, body: String) -> Result<Response> {
    let handler = &app_state.handler;
    let backend = handler.backend()?;

    debug!(request = %body, "Request");

    let response_json = handler.handle_request_json(&body, &backend).await?;

    debug!(response = %response_json, "Response");

    Ok(([(header::CONTENT_TYPE, "application/json")], response_json).into_response())
}
