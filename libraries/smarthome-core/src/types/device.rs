/// Device domain types reported by the smart home backend
use serde::{Deserialize, Serialize};

/// Kind of physical device behind an endpoint
///
/// The type alone decides a device's category and capabilities, see
/// [`DeviceType::category`] and [`DeviceType::capabilities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    /// A light that can only be turned on and off
    LightSwitch,
    /// A light that can be turned on and off or set to a brightness level
    Dimmer,
    /// An exterior blind; on/off drives it all the way up or down
    RollerShutter,
}

impl DeviceType {
    /// Category the device is displayed under
    #[must_use]
    pub const fn category(self) -> DeviceCategory {
        match self {
            Self::LightSwitch | Self::Dimmer => DeviceCategory::Light,
            Self::RollerShutter => DeviceCategory::ExteriorBlind,
        }
    }

    /// Capabilities the device supports, in declaration order
    #[must_use]
    pub const fn capabilities(self) -> &'static [DeviceCapability] {
        match self {
            Self::LightSwitch => &[DeviceCapability::PowerState],
            Self::Dimmer | Self::RollerShutter => {
                &[DeviceCapability::PowerState, DeviceCapability::Percentage]
            }
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightSwitch => "LIGHT_SWITCH",
            Self::Dimmer => "DIMMER",
            Self::RollerShutter => "ROLLER_SHUTTER",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display category of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCategory {
    /// Lights of any kind
    Light,
    /// Blinds, shutters and awnings mounted outside
    ExteriorBlind,
}

impl DeviceCategory {
    /// Wire name, also used as the assistant's display category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::ExteriorBlind => "EXTERIOR_BLIND",
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single controllable feature of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCapability {
    /// Can be turned on and off
    PowerState,
    /// Takes a percent value (dimmers, roller shutters)
    Percentage,
}

/// Requested power state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DevicePowerState {
    /// Powered on
    On,
    /// Powered off
    Off,
}

impl DevicePowerState {
    /// Convert to string representation
    ///
    /// This is the backend path segment and the reported property value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl std::fmt::Display for DevicePowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Stable identifier, unique across all devices
    pub id: String,

    /// Display name (e.g., "Kitchen light")
    pub name: String,

    /// Free text description
    #[serde(default)]
    pub description: String,

    /// Device kind
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

impl Device {
    /// Create a device without a description
    pub fn new(id: impl Into<String>, name: impl Into<String>, device_type: DeviceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            device_type,
        }
    }

    /// Category derived from the device type
    #[must_use]
    pub const fn category(&self) -> DeviceCategory {
        self.device_type.category()
    }

    /// Capabilities derived from the device type
    #[must_use]
    pub const fn capabilities(&self) -> &'static [DeviceCapability] {
        self.device_type.capabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn test_catalog_table() {
        assert_eq!(DeviceType::LightSwitch.category(), DeviceCategory::Light);
        assert_eq!(
            DeviceType::LightSwitch.capabilities(),
            &[DeviceCapability::PowerState]
        );

        assert_eq!(DeviceType::Dimmer.category(), DeviceCategory::Light);
        assert_eq!(
            DeviceType::Dimmer.capabilities(),
            &[DeviceCapability::PowerState, DeviceCapability::Percentage]
        );

        assert_eq!(
            DeviceType::RollerShutter.category(),
            DeviceCategory::ExteriorBlind
        );
        assert_eq!(
            DeviceType::RollerShutter.capabilities(),
            &[DeviceCapability::PowerState, DeviceCapability::Percentage]
        );
    }

    #[test]
    fn test_every_type_has_capabilities() {
        for device_type in [
            DeviceType::LightSwitch,
            DeviceType::Dimmer,
            DeviceType::RollerShutter,
        ] {
            assert!(!device_type.capabilities().is_empty(), "{device_type}");
        }
    }

    #[test]
    fn test_wire_names_match_serde() {
        for device_type in [
            DeviceType::LightSwitch,
            DeviceType::Dimmer,
            DeviceType::RollerShutter,
        ] {
            assert_eq!(to_value(device_type).unwrap(), json!(device_type.as_str()));
        }
        for category in [DeviceCategory::Light, DeviceCategory::ExteriorBlind] {
            assert_eq!(to_value(category).unwrap(), json!(category.as_str()));
        }
        assert_eq!(to_value(DevicePowerState::On).unwrap(), json!("ON"));
        assert_eq!(to_value(DevicePowerState::Off).unwrap(), json!("OFF"));
    }

    #[test]
    fn test_device_from_backend_record() {
        let device: Device = from_value(json!({
            "id": "terrace",
            "name": "Terrace shutter",
            "description": "South side",
            "type": "ROLLER_SHUTTER"
        }))
        .unwrap();

        assert_eq!(device.id, "terrace");
        assert_eq!(device.description, "South side");
        assert_eq!(device.category(), DeviceCategory::ExteriorBlind);
    }

    #[test]
    fn test_device_description_is_optional() {
        let device: Device = from_value(json!({
            "id": "desk",
            "name": "Desk lamp",
            "type": "LIGHT_SWITCH"
        }))
        .unwrap();

        assert_eq!(device, Device::new("desk", "Desk lamp", DeviceType::LightSwitch));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = from_value::<Device>(json!({
            "id": "tv",
            "name": "TV",
            "type": "TELEVISION"
        }));
        assert!(result.is_err());
    }
}
