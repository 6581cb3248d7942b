#![allow(dead_code)]

use chat_relay::chat_db::{ChatDbClient, ChatDbConfig};
use tempfile::TempDir;

/// Open a fresh chat store in a temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped, so keep it
/// alive for the duration of the test.
pub async fn temp_store() -> (TempDir, ChatDbClient) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ChatDbConfig::from_path(dir.path().join("chat_history.db"));
    let client = ChatDbClient::new(config)
        .await
        .expect("Failed to open chat store");
    (dir, client)
}

/// Build an endpoint URL on a mock server
pub fn endpoint(server_uri: &str, path: &str) -> String {
    format!("{}{}", server_uri, path)
}
