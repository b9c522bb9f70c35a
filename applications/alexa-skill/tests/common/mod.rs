//! Common test utilities and fixtures
#![allow(dead_code)]

use alexa_skill::{Dispatcher, SkillHandler};
use smarthome_api_client::ApiConfig;
use smarthome_core::Device;
use std::path::PathBuf;

/// Nothing listens here; handlers built on it must not reach the backend
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

/// Read a JSON fixture from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Fixture {} not readable: {}", path.display(), e))
}

/// Expected response fixture without the trailing newline of the file
pub fn expected_response(name: &str) -> String {
    fixture(name).trim_end().to_string()
}

/// Handler with fixed message ids and timestamps
pub fn reproducible_handler(backend_url: &str) -> SkillHandler {
    SkillHandler::new(Dispatcher::reproducible(), ApiConfig::new(backend_url))
}

/// The three devices of `devices.json`
pub fn fixture_devices() -> Vec<Device> {
    serde_json::from_str(&fixture("devices.json")).unwrap()
}
