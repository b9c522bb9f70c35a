use super::header::{namespace, PAYLOAD_VERSION};
use serde::{Deserialize, Serialize};
use smarthome_core::DeviceCapability;

const CAPABILITY_TYPE_ALEXA_INTERFACE: &str = "AlexaInterface";

/// A device as announced to Alexa during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEndpoint {
    pub endpoint_id: String,
    pub manufacturer_name: String,
    pub description: String,
    pub friendly_name: String,
    pub display_categories: Vec<String>,
    pub capabilities: Vec<Capability>,
}

/// An interface an endpoint implements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    #[serde(rename = "type")]
    pub capability_type: String,
    pub interface: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<CapabilityProperties>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityProperties {
    pub supported: Vec<Supported>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supported {
    pub name: String,
}

impl Capability {
    fn interface(interface: &str, properties: Option<CapabilityProperties>) -> Self {
        Self {
            capability_type: CAPABILITY_TYPE_ALEXA_INTERFACE.to_string(),
            interface: interface.to_string(),
            version: PAYLOAD_VERSION.to_string(),
            properties,
        }
    }

    fn controller(interface: &str, supported: &str) -> Self {
        Self::interface(
            interface,
            Some(CapabilityProperties {
                supported: vec![Supported {
                    name: supported.to_string(),
                }],
            }),
        )
    }

    /// The base `Alexa` interface every endpoint needs
    pub fn alexa() -> Self {
        Self::interface(namespace::ALEXA, None)
    }

    /// `Alexa.PowerController` reporting `powerState`
    pub fn power_controller() -> Self {
        Self::controller(namespace::POWER_CONTROLLER, "powerState")
    }

    /// `Alexa.PercentageController` reporting `percentage`
    pub fn percentage_controller() -> Self {
        Self::controller(namespace::PERCENTAGE_CONTROLLER, "percentage")
    }
}

impl From<DeviceCapability> for Capability {
    fn from(capability: DeviceCapability) -> Self {
        match capability {
            DeviceCapability::PowerState => Self::power_controller(),
            DeviceCapability::Percentage => Self::percentage_controller(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_alexa_capability_has_no_properties() {
        assert_eq!(
            to_value(Capability::alexa()).unwrap(),
            json!({ "type": "AlexaInterface", "interface": "Alexa", "version": "3" })
        );
    }

    #[test]
    fn test_controller_capabilities() {
        assert_eq!(
            to_value(Capability::from(DeviceCapability::PowerState)).unwrap(),
            json!({
                "type": "AlexaInterface",
                "interface": "Alexa.PowerController",
                "version": "3",
                "properties": { "supported": [{ "name": "powerState" }] }
            })
        );
        assert_eq!(
            Capability::from(DeviceCapability::Percentage),
            Capability::percentage_controller()
        );
    }
}
