//! Domain types for devices managed by the smart home backend

mod device;

pub use device::{Device, DeviceCapability, DeviceCategory, DevicePowerState, DeviceType};
