//! Directive dispatch
//!
//! Decides from the directive's namespace which backend call to make and
//! turns the outcome into the matching Alexa event. Every failure, whatever
//! its cause, ends in the same generic error response.

use crate::alexa::{
    namespace, AlexaResponse, Capability, Context, ContextProperty, Directive, DiscoveryEndpoint,
    Endpoint, Event, Header, ResponsePayload, Scope, NAME_RESPONSE,
};
use crate::clock::{
    format_time_of_sample, Clock, FixedClock, FixedMessageId, MessageIdSource, SystemClock,
    UuidMessageIds,
};
use smarthome_core::{BackendClient, Device, DevicePowerState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Manufacturer shown for every discovered device. Must not be empty.
pub const MANUFACTURER_NAME: &str = "Smart Home";

/// Placeholder description for every discovered device. Must not be empty.
pub const DEVICE_DESCRIPTION: &str = "-";

pub const ERROR_TYPE_INVALID_DIRECTIVE: &str = "INVALID_DIRECTIVE";
pub const ERROR_MESSAGE: &str = "Request is invalid.";

const NAME_ACCEPT_GRANT_RESPONSE: &str = "AcceptGrant.Response";
const NAME_DISCOVER_RESPONSE: &str = "Discover.Response";
const NAME_ERROR_RESPONSE: &str = "ErrorResponse";
const NAME_TURN_ON: &str = "TurnOn";

/// Routes directives to the backend and builds the answers
///
/// Holds no per-request state; one instance serves any number of
/// concurrent requests.
#[derive(Clone)]
pub struct Dispatcher {
    ids: Arc<dyn MessageIdSource>,
    clock: Arc<dyn Clock>,
}

impl Dispatcher {
    pub fn new(ids: Arc<dyn MessageIdSource>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Random message ids and the system clock
    pub fn production() -> Self {
        Self::new(Arc::new(UuidMessageIds), Arc::new(SystemClock))
    }

    /// Fixed message id and sample time, for byte-stable output
    pub fn reproducible() -> Self {
        Self::new(
            Arc::new(FixedMessageId::reproducible()),
            Arc::new(FixedClock::reproducible()),
        )
    }

    /// Answer a directive. Never fails: problems become the error response.
    pub async fn handle(&self, directive: &Directive, backend: &dyn BackendClient) -> AlexaResponse {
        let header = &directive.header;

        debug!(namespace = %header.namespace, name = %header.name, "Dispatching directive");

        match header.namespace.as_str() {
            // Authorization is always granted
            namespace::AUTHORIZATION => self.accept_grant(),
            namespace::DISCOVERY => self.discover(backend).await,
            namespace::POWER_CONTROLLER => self.set_power_state(directive, backend).await,
            namespace::PERCENTAGE_CONTROLLER => self.set_percentage(directive, backend).await,
            other => {
                warn!(namespace = %other, name = %header.name, "Unsupported directive");
                self.error_response()
            }
        }
    }

    fn accept_grant(&self) -> AlexaResponse {
        AlexaResponse {
            context: None,
            event: Event {
                header: Header::event(
                    namespace::AUTHORIZATION,
                    NAME_ACCEPT_GRANT_RESPONSE,
                    self.ids.next_id(),
                ),
                endpoint: None,
                payload: ResponsePayload::default(),
            },
        }
    }

    async fn discover(&self, backend: &dyn BackendClient) -> AlexaResponse {
        let devices = match backend.list_devices().await {
            Ok(devices) => devices,
            Err(e) => {
                warn!(error = %e, "Failed to list devices");
                return self.error_response();
            }
        };

        info!(count = devices.len(), "Discovered devices");

        let endpoints = devices.iter().map(discovery_endpoint).collect();

        AlexaResponse {
            context: None,
            event: Event {
                header: Header::event(
                    namespace::DISCOVERY,
                    NAME_DISCOVER_RESPONSE,
                    self.ids.next_id(),
                ),
                endpoint: None,
                payload: ResponsePayload {
                    endpoints: Some(endpoints),
                    ..Default::default()
                },
            },
        }
    }

    async fn set_power_state(
        &self,
        directive: &Directive,
        backend: &dyn BackendClient,
    ) -> AlexaResponse {
        let Some(endpoint) = &directive.endpoint else {
            warn!("PowerController directive without endpoint");
            return self.error_response();
        };

        let state = if directive.header.name == NAME_TURN_ON {
            DevicePowerState::On
        } else {
            DevicePowerState::Off
        };

        if let Err(e) = backend.set_power_state(&endpoint.endpoint_id, state).await {
            warn!(
                endpoint_id = %endpoint.endpoint_id,
                state = %state,
                error = %e,
                "Failed to set power state"
            );
            return self.error_response();
        }

        self.state_report(
            directive,
            endpoint,
            ContextProperty::new(
                namespace::POWER_CONTROLLER,
                "powerState",
                state.as_str(),
                self.time_of_sample(),
            ),
        )
    }

    async fn set_percentage(
        &self,
        directive: &Directive,
        backend: &dyn BackendClient,
    ) -> AlexaResponse {
        let Some(endpoint) = &directive.endpoint else {
            warn!("PercentageController directive without endpoint");
            return self.error_response();
        };

        let Some(requested) = directive.payload.percentage else {
            warn!(endpoint_id = %endpoint.endpoint_id, "PercentageController directive without percentage");
            return self.error_response();
        };

        let Some(percentage) = u8::try_from(requested).ok().filter(|p| *p <= 100) else {
            warn!(endpoint_id = %endpoint.endpoint_id, percentage = requested, "Percentage out of range");
            return self.error_response();
        };

        if let Err(e) = backend
            .set_percentage(&endpoint.endpoint_id, percentage)
            .await
        {
            warn!(
                endpoint_id = %endpoint.endpoint_id,
                percentage,
                error = %e,
                "Failed to set percentage"
            );
            return self.error_response();
        }

        self.state_report(
            directive,
            endpoint,
            ContextProperty::new(
                namespace::PERCENTAGE_CONTROLLER,
                "percentage",
                percentage.to_string(),
                self.time_of_sample(),
            ),
        )
    }

    /// Success answer for a controller directive
    fn state_report(
        &self,
        directive: &Directive,
        endpoint: &Endpoint,
        property: ContextProperty,
    ) -> AlexaResponse {
        AlexaResponse {
            context: Some(Context {
                properties: vec![property],
            }),
            event: Event {
                header: Header::event(namespace::ALEXA, NAME_RESPONSE, self.ids.next_id())
                    .with_correlation_token(directive.header.correlation_token.clone()),
                endpoint: Some(Endpoint {
                    scope: endpoint
                        .scope
                        .as_ref()
                        .map(|scope| Scope::bearer(scope.token.clone())),
                    endpoint_id: endpoint.endpoint_id.clone(),
                }),
                payload: ResponsePayload::default(),
            },
        }
    }

    /// The one error shape used for every failure
    pub fn error_response(&self) -> AlexaResponse {
        AlexaResponse {
            context: None,
            event: Event {
                header: Header::event(namespace::ALEXA, NAME_ERROR_RESPONSE, self.ids.next_id()),
                endpoint: None,
                payload: ResponsePayload {
                    error_type: Some(ERROR_TYPE_INVALID_DIRECTIVE.to_string()),
                    message: Some(ERROR_MESSAGE.to_string()),
                    ..Default::default()
                },
            },
        }
    }

    fn time_of_sample(&self) -> String {
        format_time_of_sample(self.clock.now())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::production()
    }
}

/// Describe a backend device for Alexa
///
/// The base `Alexa` interface is added in front of every controller
/// interface, so a device with two capabilities lists it twice. Existing
/// skill configurations were discovered with this exact shape.
fn discovery_endpoint(device: &Device) -> DiscoveryEndpoint {
    let capabilities = device
        .capabilities()
        .iter()
        .flat_map(|capability| [Capability::alexa(), Capability::from(*capability)])
        .collect();

    DiscoveryEndpoint {
        endpoint_id: device.id.clone(),
        manufacturer_name: MANUFACTURER_NAME.to_string(),
        description: DEVICE_DESCRIPTION.to_string(),
        friendly_name: device.name.clone(),
        display_categories: vec![device.category().as_str().to_string()],
        capabilities,
    }
}
