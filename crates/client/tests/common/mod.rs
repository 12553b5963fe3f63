//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::collections::HashMap;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
#[allow(unused_imports)]
pub use zenoss_client::testing::{load_fixture, load_fixture_text, provider};
#[allow(unused_imports)]
pub use zenoss_client::{ClientError, ZenossClient};

pub const API_KEY: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFF";
pub const DEVICE_ROUTER_PATH: &str = "/zport/dmd/device_router";

/// Provider configured for API key auth against the mock server.
#[allow(dead_code)]
pub fn api_key_config(server: &MockServer) -> HashMap<String, String> {
    provider(&[("hostname", server.uri().as_str()), ("api_key", API_KEY)])
}

/// Provider configured for basic auth against the mock server.
#[allow(dead_code)]
pub fn user_pass_config(server: &MockServer) -> HashMap<String, String> {
    provider(&[
        ("hostname", server.uri().as_str()),
        ("username", "username"),
        ("password", "password"),
    ])
}

#[allow(dead_code)]
pub fn client_for(config: HashMap<String, String>) -> ZenossClient {
    ZenossClient::builder().provider(config).build().unwrap()
}

/// 200 response carrying a device listing fixture.
#[allow(dead_code)]
pub fn devices_response(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(load_fixture(fixture))
}
