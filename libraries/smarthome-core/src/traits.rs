/// Core traits for the smart home skill
use crate::error::Result;
use crate::types::{Device, DevicePowerState};
use async_trait::async_trait;

/// Backend client trait
///
/// Implementers talk to the service that actually switches devices. Every
/// call is a single request: no retries, and success is decided by the
/// response status alone.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// List every device known to the backend
    async fn list_devices(&self) -> Result<Vec<Device>>;

    /// Turn a device on or off
    async fn set_power_state(&self, device_id: &str, state: DevicePowerState) -> Result<()>;

    /// Set a device to a level between 0 and 100
    async fn set_percentage(&self, device_id: &str, percentage: u8) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartHomeError;
    use crate::types::DeviceType;

    async fn switch_all_off(backend: &dyn BackendClient) -> Result<usize> {
        let devices = backend.list_devices().await?;
        for device in &devices {
            backend
                .set_power_state(&device.id, DevicePowerState::Off)
                .await?;
        }
        Ok(devices.len())
    }

    #[tokio::test]
    async fn test_mock_usable_as_trait_object() {
        let mut backend = MockBackendClient::new();
        backend.expect_list_devices().times(1).returning(|| {
            Ok(vec![
                Device::new("a", "A", DeviceType::LightSwitch),
                Device::new("b", "B", DeviceType::Dimmer),
            ])
        });
        backend
            .expect_set_power_state()
            .withf(|_, state| *state == DevicePowerState::Off)
            .times(2)
            .returning(|_, _| Ok(()));

        assert_eq!(switch_all_off(&backend).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mock_error_propagates() {
        let mut backend = MockBackendClient::new();
        backend
            .expect_list_devices()
            .returning(|| Err(SmartHomeError::backend(500, "boom")));

        let err = switch_all_off(&backend).await.unwrap_err();
        assert!(matches!(err, SmartHomeError::Backend { status: 500, .. }));
    }
}
