/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kantor-adapter tests

use std::path::PathBuf;
use std::sync::Arc;

use kantor_adapter::{ClientConfig, CredentialStore, KantorClient, MemoryCredentialStore};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, sharing `store`
pub fn client_with_store(server: &MockServer, store: Arc<dyn CredentialStore>) -> KantorClient {
    KantorClient::with_config(ClientConfig::with_base_url(server.uri()), store)
        .expect("client init")
}

/// Client pointed at the mock server with an empty in-memory store
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> KantorClient {
    client_with_store(server, Arc::new(MemoryCredentialStore::new()))
}

/// Unique scratch directory for token files
#[allow(dead_code)]
pub fn temp_token_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("kantor-test-{}", uuid::Uuid::new_v4()));
    path
}

/// Mock session token for testing
#[allow(dead_code)]
pub fn mock_session_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
