//! Raw request handling
//!
//! Turns the bytes of one invocation into a directive, lets the dispatcher
//! answer it and writes the answer back. Only this layer knows about JSON.

use crate::alexa::AlexaRequest;
use crate::dispatcher::Dispatcher;
use crate::error::{Result, SkillError};
use smarthome_api_client::{ApiClient, ApiConfig};
use smarthome_core::BackendClient;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

/// Entry point for one skill invocation
#[derive(Clone)]
pub struct SkillHandler {
    dispatcher: Dispatcher,
    api: ApiConfig,
}

impl SkillHandler {
    pub fn new(dispatcher: Dispatcher, api: ApiConfig) -> Self {
        Self { dispatcher, api }
    }

    /// Backend settings every invocation is built from
    pub fn api_config(&self) -> &ApiConfig {
        &self.api
    }

    /// Build a fresh backend client for one invocation
    pub fn backend(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(self.api.clone())?)
    }

    /// Read a directive from `input` and write the answer to `output`.
    ///
    /// Failures are logged and swallowed; nothing is written when no answer
    /// could be produced.
    pub async fn handle_request<R, W>(&self, mut input: R, mut output: W)
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(e) = self.try_handle_request(&mut input, &mut output).await {
            error!(error = %e, "Failed to handle request");
        }
    }

    async fn try_handle_request<R, W>(&self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let backend = self.backend()?;

        let mut request_json = String::new();
        input.read_to_string(&mut request_json).await?;

        debug!(request = %request_json, "Request");

        let response_json = self.handle_request_json(&request_json, &backend).await?;

        debug!(response = %response_json, "Response");

        output.write_all(response_json.as_bytes()).await?;
        output.flush().await?;

        Ok(())
    }

    /// Answer a directive given as JSON with pretty-printed JSON
    pub async fn handle_request_json(
        &self,
        request_json: &str,
        backend: &dyn BackendClient,
    ) -> Result<String> {
        let request: AlexaRequest =
            serde_json::from_str(request_json).map_err(SkillError::Decode)?;

        let response = self.dispatcher.handle(&request.directive, backend).await;

        serde_json::to_string_pretty(&response).map_err(SkillError::Encode)
    }
}
