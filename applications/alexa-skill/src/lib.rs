//! Alexa Skill Library
//!
//! Smart home skill that answers Alexa directives by forwarding them to a
//! REST device backend.
//!
//! A request travels through three layers:
//! - [`handler::SkillHandler`] decodes the raw JSON, builds the backend
//!   client and encodes the answer
//! - [`dispatcher::Dispatcher`] picks the backend call for the directive's
//!   namespace and builds the response, or the generic error response
//! - [`alexa`] holds the wire model shared by both
//!
//! The CLI binary hosts the handler over stdin/stdout or HTTP.

pub mod alexa;
pub mod api;
pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod state;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, FixedMessageId, MessageIdSource, SystemClock, UuidMessageIds};
pub use config::SkillConfig;
pub use dispatcher::Dispatcher;
pub use error::{Result, SkillError};
pub use handler::SkillHandler;
pub use state::AppState;
