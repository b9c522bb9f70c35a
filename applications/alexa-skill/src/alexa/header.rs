use serde::{Deserialize, Serialize};

/// Payload version of every message this skill sends
pub const PAYLOAD_VERSION: &str = "3";

/// Header name of state reports answering a controller directive
pub const NAME_RESPONSE: &str = "Response";

/// Interface namespaces
pub mod namespace {
    pub const ALEXA: &str = "Alexa";
    pub const AUTHORIZATION: &str = "Alexa.Authorization";
    pub const DISCOVERY: &str = "Alexa.Discovery";
    pub const POWER_CONTROLLER: &str = "Alexa.PowerController";
    pub const PERCENTAGE_CONTROLLER: &str = "Alexa.PercentageController";
}

/// Message header shared by directives and events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub namespace: String,
    pub name: String,
    #[serde(default = "default_payload_version")]
    pub payload_version: String,
    #[serde(default)]
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl Header {
    /// Header for an outgoing event
    pub fn event(
        namespace: impl Into<String>,
        name: impl Into<String>,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            payload_version: default_payload_version(),
            message_id: message_id.into(),
            correlation_token: None,
        }
    }

    /// Echo a correlation token back to the caller
    #[must_use]
    pub fn with_correlation_token(mut self, token: Option<String>) -> Self {
        self.correlation_token = token;
        self
    }
}

fn default_payload_version() -> String {
    PAYLOAD_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn test_event_header_omits_missing_token() {
        let header = Header::event(namespace::ALEXA, "ErrorResponse", "id-1");

        assert_eq!(
            to_value(&header).unwrap(),
            json!({
                "namespace": "Alexa",
                "name": "ErrorResponse",
                "payloadVersion": "3",
                "messageId": "id-1"
            })
        );
    }

    #[test]
    fn test_correlation_token_echoed() {
        let header = Header::event(namespace::ALEXA, NAME_RESPONSE, "id-2")
            .with_correlation_token(Some("token".to_string()));

        assert_eq!(to_value(&header).unwrap()["correlationToken"], "token");
    }

    #[test]
    fn test_directive_header_defaults() {
        let header: Header = from_value(json!({
            "namespace": "Alexa.Discovery",
            "name": "Discover"
        }))
        .unwrap();

        assert_eq!(header.payload_version, "3");
        assert!(header.message_id.is_empty());
        assert!(header.correlation_token.is_none());
    }
}
