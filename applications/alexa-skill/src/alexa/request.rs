use super::header::Header;
use super::response::{Endpoint, Scope};
use serde::{Deserialize, Serialize};

/// Top level envelope of every request Alexa sends to the skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlexaRequest {
    pub directive: Directive,
}

/// A command from Alexa: "do this, do that"
///
/// Only `header` is always present. `endpoint` is set for controller
/// directives, and `payload` carries namespace specific values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(default)]
    pub payload: DirectivePayload,
}

/// Union of the directive payload fields the skill understands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectivePayload {
    /// Discovery: the user's access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,

    /// PercentageController: requested level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i64>,

    /// Authorization: the granted authorization code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<Grant>,

    /// Authorization: the user the grant belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grantee: Option<Scope>,
}

/// OAuth grant sent with `AcceptGrant`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    #[serde(rename = "type")]
    pub grant_type: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_discovery_request() {
        let request: AlexaRequest = serde_json::from_str(
            r#"{
              "directive": {
                "header": {
                  "namespace": "Alexa.Discovery",
                  "name": "Discover",
                  "payloadVersion": "3",
                  "messageId": "<message id>"
                },
                "payload": {
                  "scope": {
                    "type": "BearerToken",
                    "token": "access-token-from-skill"
                  }
                }
              }
            }"#,
        )
        .unwrap();

        let directive = request.directive;

        assert_eq!(directive.header.namespace, "Alexa.Discovery");
        assert_eq!(directive.header.name, "Discover");
        assert_eq!(directive.header.payload_version, "3");
        assert_eq!(directive.header.message_id, "<message id>");

        assert!(directive.endpoint.is_none());

        let scope = directive.payload.scope.unwrap();
        assert_eq!(scope.scope_type, "BearerToken");
        assert_eq!(scope.token, "access-token-from-skill");
    }

    #[test]
    fn test_parse_accept_grant() {
        let request: AlexaRequest = serde_json::from_str(
            r#"{
              "directive": {
                "header": {
                  "namespace": "Alexa.Authorization",
                  "name": "AcceptGrant",
                  "messageId": "abc",
                  "payloadVersion": "3"
                },
                "payload": {
                  "grant": { "type": "OAuth2.AuthorizationCode", "code": "VGhpcyBpcyBhbiBhdXRob3JpemF0aW9uIGNvZGUuIDotKQ==" },
                  "grantee": { "type": "BearerToken", "token": "access-token-from-skill" }
                }
              }
            }"#,
        )
        .unwrap();

        let payload = request.directive.payload;
        assert_eq!(payload.grant.unwrap().grant_type, "OAuth2.AuthorizationCode");
        assert_eq!(payload.grantee.unwrap().token, "access-token-from-skill");
    }

    #[test]
    fn test_missing_payload_defaults() {
        let directive: Directive = serde_json::from_str(
            r#"{ "header": { "namespace": "Alexa.PowerController", "name": "TurnOff" } }"#,
        )
        .unwrap();

        assert_eq!(directive.payload, DirectivePayload::default());
    }

    #[test]
    fn test_endpoint_cookie_ignored() {
        let directive: Directive = serde_json::from_str(
            r#"{
              "header": { "namespace": "Alexa.PowerController", "name": "TurnOn" },
              "endpoint": {
                "scope": { "type": "BearerToken", "token": "t" },
                "endpointId": "my_light_switch",
                "cookie": { "room": "kitchen" }
              },
              "payload": {}
            }"#,
        )
        .unwrap();

        assert_eq!(directive.endpoint.unwrap().endpoint_id, "my_light_switch");
    }
}
