//! Common test utilities and helpers

use genai_files::Client;

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "test-key-0123456789".to_string()
}

/// Build a client pointed at a mock server
#[allow(dead_code)]
pub fn client_for(mock_uri: &str) -> Client {
    Client::builder()
        .api_key(test_api_key())
        .base_url(mock_uri)
        .build()
        .expect("failed to build client")
}

/// A minimal file resource body, as the server would return it
#[allow(dead_code)]
pub fn file_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "displayName": "notes",
        "mimeType": "text/plain",
        "sizeBytes": "11",
        "createTime": "2024-05-01T12:00:00Z",
        "uri": format!("https://generativelanguage.googleapis.com/v1beta/{name}"),
        "state": "ACTIVE"
    })
}
