//! Shared fixtures for REST adapter contract tests.

use serde_json::{Value, json};
use taskflow::backend::BackendClient;
use taskflow::config::BackendConfig;
use taskflow::session::domain::{AccessToken, Identity, UserId};
use uuid::Uuid;
use wiremock::MockServer;

/// Public API key used by every contract test.
pub const API_KEY: &str = "anon-test-key";

/// Session token used by every contract test.
pub const ACCESS_TOKEN: &str = "session-token";

/// Builds a backend client pointed at `server`.
///
/// # Panics
///
/// Panics if the mock server URI is rejected by configuration validation.
pub fn backend(server: &MockServer) -> BackendClient {
    backend_with_timeout(server, 10)
}

/// Builds a backend client pointed at `server` with a custom timeout.
///
/// # Panics
///
/// Panics if the mock server URI is rejected by configuration validation.
pub fn backend_with_timeout(server: &MockServer, timeout_secs: u64) -> BackendClient {
    let config =
        BackendConfig::new(format!("{}/", server.uri()), API_KEY).with_request_timeout_secs(timeout_secs);
    BackendClient::new(config).expect("mock server URI should be valid")
}

/// Returns a signed-in identity carrying [`ACCESS_TOKEN`].
pub fn identity() -> Identity {
    Identity::new(UserId::new(), "ada@example.com", AccessToken::new(ACCESS_TOKEN))
}

/// Returns a task row as the backend serializes it.
pub fn task_row(id: Uuid, owner: UserId, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": owner,
        "title": title,
        "description": null,
        "status": status,
        "priority": "medium",
        "due_date": null,
        "created_at": "2024-06-15T09:30:00Z",
        "updated_at": "2024-06-15T09:30:00Z"
    })
}
