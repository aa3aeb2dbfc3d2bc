//! Mock storage node used by the E2E tests.

#![allow(dead_code)]

use internet15_sdk::{SdkConfig, StorageClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Hash the mock node hands out for uploads.
pub const TEST_HASH: &str = "QmZ4tDuvesekSs4qM5ZBKpXiZGun7S2CYtEZRB3DYXkjGx";

/// A wiremock server standing in for an IPFS node.
pub struct MockStorageNode {
    server: MockServer,
}

impl MockStorageNode {
    /// Start an empty mock node.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock node.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Access the underlying server for custom mocks.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// SDK configuration pointing at this node.
    pub fn config(&self) -> SdkConfig {
        SdkConfig {
            storage_node_url: self.url(),
            timeout_secs: 5,
            ..SdkConfig::default()
        }
    }

    /// Storage client pointing at this node.
    pub fn client(&self) -> StorageClient {
        StorageClient::new(&self.config())
    }

    /// Answer uploads with `hash`.
    pub async fn accept_uploads(&self, hash: &str) {
        let body = format!(r#"{{"Name":"{hash}","Hash":"{hash}","Size":"27"}}"#);
        Mock::given(method("POST"))
            .and(path("/api/v0/add"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer uploads with an HTTP error.
    pub async fn reject_uploads(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/v0/add"))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }

    /// Serve `content` at `/ipfs/{hash}`.
    pub async fn serve(&self, hash: &str, content: &[u8]) {
        Mock::given(method("GET"))
            .and(path(format!("/ipfs/{hash}")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the node has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}
