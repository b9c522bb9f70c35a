//! Smart Home Core
//!
//! Platform-agnostic device types, the backend client contract and error
//! handling shared by the skill and the backend client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Device Catalog**: `Device`, `DeviceType` and the fixed mapping from a
//!   type to its `DeviceCategory` and `DeviceCapability` list
//! - **Backend Contract**: the `BackendClient` trait for listing devices and
//!   switching or dimming them
//! - **Error Handling**: unified `SmartHomeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use smarthome_core::types::{Device, DeviceCapability, DeviceCategory, DeviceType};
//!
//! let dimmer = Device::new("hallway", "Hallway", DeviceType::Dimmer);
//!
//! assert_eq!(dimmer.category(), DeviceCategory::Light);
//! assert_eq!(
//!     dimmer.capabilities(),
//!     &[DeviceCapability::PowerState, DeviceCapability::Percentage]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, SmartHomeError};
pub use traits::BackendClient;
#[cfg(any(test, feature = "testing"))]
pub use traits::MockBackendClient;

pub use types::{Device, DeviceCapability, DeviceCategory, DevicePowerState, DeviceType};
