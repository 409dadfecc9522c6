/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for rockside-client tests

use rockside_client::{Credential, EncryptedAccount, Network, RocksideClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, authenticated with an API key
#[allow(dead_code)]
pub fn apikey_client(server: &MockServer, network: Network) -> RocksideClient {
    RocksideClient::new(&server.uri(), network, Credential::ApiKey(mock_apikey()))
        .expect("client init")
}

/// Client pointed at the mock server, authenticated with a bearer token
#[allow(dead_code)]
pub fn token_client(server: &MockServer, network: Network) -> RocksideClient {
    RocksideClient::new(&server.uri(), network, Credential::Token(mock_token()))
        .expect("client init")
}

pub fn mock_apikey() -> String {
    "test-api-key".to_string()
}

pub fn mock_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Encrypted account with small, recognizable binary fields
#[allow(dead_code)]
pub fn sample_account() -> EncryptedAccount {
    EncryptedAccount {
        username: "alice@example.com".to_string(),
        password_hash: vec![0xaa, 0xbb],
        password_derived_key_hash: vec![0x01],
        encrypted_encryption_key: vec![0x10, 0x20, 0x30],
        encrypted_encryption_key_iv: vec![0x00, 0x0f],
        iterations: 100_000,
    }
}
