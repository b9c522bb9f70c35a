//! HTTP client for the smart home device backend.

use crate::error::{ApiClientError, Result};
use crate::types::ApiConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use smarthome_core::{BackendClient, Device, DevicePowerState};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the REST backend that controls the devices.
///
/// The client is cheap to build and holds no state besides the connection
/// pool, so callers are free to create one per request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        // Validate URL
        if config.url.trim().is_empty() {
            return Err(ApiClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = Url::parse(config.url.trim())
            .map_err(|e| ApiClientError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SmartHomeSkill/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the backend base URL.
    pub fn url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and fail on any non-success status.
    async fn get(&self, url: Url) -> Result<Response> {
        debug!(url = %url, "Execute call");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        debug!(url = %url, status = status.as_u16(), "Call result");

        if status.is_success() {
            Ok(response)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ApiClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl BackendClient for ApiClient {
    async fn list_devices(&self) -> smarthome_core::Result<Vec<Device>> {
        let url = self.endpoint(&["alexa", "devices"])?;
        let response = self.get(url).await?;

        let devices: Vec<Device> = response.json().await.map_err(|e| {
            ApiClientError::ParseError(format!("Failed to parse device list: {}", e))
        })?;

        debug!(devices = ?devices, "Devices from API");

        Ok(devices)
    }

    async fn set_power_state(
        &self,
        device_id: &str,
        state: DevicePowerState,
    ) -> smarthome_core::Result<()> {
        let url = self.endpoint(&["alexa", "switch", device_id, "to", state.as_str()])?;
        self.get(url).await?;
        Ok(())
    }

    async fn set_percentage(&self, device_id: &str, percentage: u8) -> smarthome_core::Result<()> {
        let percentage = percentage.to_string();
        let url = self.endpoint(&["alexa", "set", device_id, "to", &percentage])?;
        self.get(url).await?;
        Ok(())
    }
}
