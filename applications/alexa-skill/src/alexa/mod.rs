//! Alexa Smart Home wire model
//!
//! Mirrors the JSON envelopes of the Smart Home Skill API, payload version 3.
//! Optional fields that are absent are left out when serializing, and fields
//! serialize in declaration order.

mod discovery;
mod header;
mod request;
mod response;

pub use discovery::{Capability, CapabilityProperties, DiscoveryEndpoint, Supported};
pub use header::{namespace, Header, NAME_RESPONSE, PAYLOAD_VERSION};
pub use request::{AlexaRequest, Directive, DirectivePayload, Grant};
pub use response::{
    AlexaResponse, Context, ContextProperty, Endpoint, Event, ResponsePayload, Scope,
    UNCERTAINTY_IN_MILLISECONDS,
};
