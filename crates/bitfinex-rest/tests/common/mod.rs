//! Common test utilities for the REST integration tests
//!
//! Every test drives the real client against a wiremock server returning
//! wire-shape v1 bodies.

use bitfinex_rest::{BitfinexClient, ClientConfig, Credentials};
use wiremock::{MockServer, ResponseTemplate};

/// API key baked into the private test client
#[allow(dead_code)]
pub const TEST_KEY: &str = "test-api-key";

/// API secret baked into the private test client
#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-api-secret";

/// Client without credentials, pointed at the mock server
pub fn public_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

/// Client holding the test credentials, pointed at the mock server
#[allow(dead_code)]
pub fn private_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(
        ClientConfig::new()
            .with_credentials(Credentials::new(TEST_KEY, TEST_SECRET))
            .with_base_url(server.uri()),
    )
}

/// Respond with a raw JSON body the way the exchange does
pub fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}
