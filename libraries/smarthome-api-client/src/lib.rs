//! Smart Home API Client
//!
//! HTTP implementation of [`smarthome_core::BackendClient`] for the REST
//! backend that switches the devices.
//!
//! # Endpoints
//!
//! - `GET /alexa/devices` lists all devices
//! - `GET /alexa/switch/{endpointId}/to/{ON|OFF}` sets the power state
//! - `GET /alexa/set/{endpointId}/to/{percentage}` sets a level
//!
//! # Example
//!
//! ```ignore
//! use smarthome_api_client::{ApiClient, ApiConfig};
//! use smarthome_core::{BackendClient, DevicePowerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("https://myserver.com:50000/"))?;
//!
//!     for device in client.list_devices().await? {
//!         println!("{} ({})", device.name, device.device_type);
//!     }
//!
//!     client.set_power_state("kitchen", DevicePowerState::On).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiClientError, Result};
pub use types::ApiConfig;
