use super::discovery::DiscoveryEndpoint;
use super::header::Header;
use serde::{Deserialize, Serialize};

/// Uncertainty reported with every context property
pub const UNCERTAINTY_IN_MILLISECONDS: u32 = 200;

const SCOPE_TYPE_BEARER_TOKEN: &str = "BearerToken";

/// Top level envelope of every answer the skill sends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlexaResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(default)]
    pub payload: ResponsePayload,
}

/// Union of the event payload fields the skill sends
///
/// Empty for acceptance and state reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Discovery: all devices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<DiscoveryEndpoint>>,

    /// ErrorResponse: error category
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// ErrorResponse: human readable reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Device a directive targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    pub endpoint_id: String,
}

/// Authorization scope of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(rename = "type")]
    pub scope_type: String,
    pub token: String,
}

impl Scope {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            scope_type: SCOPE_TYPE_BEARER_TOKEN.to_string(),
            token: token.into(),
        }
    }
}

/// State of the endpoint after the directive was carried out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub properties: Vec<ContextProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextProperty {
    pub namespace: String,
    pub name: String,
    pub time_of_sample: String,
    pub uncertainty_in_milliseconds: u32,
    pub value: String,
}

impl ContextProperty {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        time_of_sample: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            time_of_sample: time_of_sample.into(),
            uncertainty_in_milliseconds: UNCERTAINTY_IN_MILLISECONDS,
            value: value.into(),
        }
    }
}
