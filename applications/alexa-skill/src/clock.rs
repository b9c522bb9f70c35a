//! Sources of message ids and sample times
//!
//! Every outgoing header needs a unique message id and every context
//! property a sample time. Both are injected into the dispatcher so tests and
//! `--reproducible` runs can pin them.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

/// Message id used in reproducible mode
pub const REPRODUCIBLE_MESSAGE_ID: &str = "MESSAGE_ID";

/// Sample time used in reproducible mode (2020-01-01T13:37:00Z)
pub const REPRODUCIBLE_TIMESTAMP_MILLIS: i64 = 1_577_885_820_000;

/// The fraction field repeats the seconds zero-padded to three digits, as
/// the wire pattern `yyyy-MM-dd'T'HH:mm:ss.sss'Z'` does.
const TIME_OF_SAMPLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.0%SZ";

/// Produces message ids for outgoing headers
pub trait MessageIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMessageIds;

impl MessageIdSource for UuidMessageIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always the same id
#[derive(Debug, Clone)]
pub struct FixedMessageId(String);

impl FixedMessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn reproducible() -> Self {
        Self::new(REPRODUCIBLE_MESSAGE_ID)
    }
}

impl MessageIdSource for FixedMessageId {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}

/// Current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn reproducible() -> Self {
        Self(
            Utc.timestamp_millis_opt(REPRODUCIBLE_TIMESTAMP_MILLIS)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as a context property `timeOfSample`
pub fn format_time_of_sample(instant: DateTime<Utc>) -> String {
    instant.format(TIME_OF_SAMPLE_FORMAT).to_string()
}
