//! Upload, resolve and fetch against a mock storage node.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::harness::{MockStorageNode, TEST_HASH};
use internet15_sdk::{Error, FileBlob, SdkConfig, StorageClient};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Uploading a text file yields a non-empty hash.
#[tokio::test]
async fn test_upload_text_file_returns_hash() {
    let node = MockStorageNode::start().await;
    node.accept_uploads(TEST_HASH).await;
    let client = node.client();

    let file = FileBlob::new("test.txt", "Hello, Internet 1.5");
    let hash = client.upload(&file).await.expect("upload");

    assert!(!hash.as_str().is_empty());
    assert_eq!(hash.as_str(), TEST_HASH);
}

/// The file travels as a multipart part named `file` with its file name.
#[tokio::test]
async fn test_upload_sends_multipart_file() {
    let node = MockStorageNode::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/add"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"test.txt\""))
        .and(body_string_contains("Hello, Internet 1.5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"Name":"test.txt","Hash":"{TEST_HASH}"}}"#)),
        )
        .expect(1)
        .mount(node.server())
        .await;

    let hash = node
        .client()
        .upload(&FileBlob::new("test.txt", "Hello, Internet 1.5"))
        .await
        .expect("upload");
    assert_eq!(hash.as_str(), TEST_HASH);
}

/// A non-success status from the node becomes `UploadFailed`.
#[tokio::test]
async fn test_upload_server_error_fails() {
    let node = MockStorageNode::start().await;
    node.reject_uploads(500, "blockstore full").await;
    let client = node.client();

    let err = client
        .upload(&FileBlob::new("test.txt", "data"))
        .await
        .unwrap_err();

    match err {
        Error::UploadFailed(msg) => assert!(msg.contains("blockstore full"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.stats().failures, 1);
}

/// Upload is attempted exactly once; there is no retry.
#[tokio::test]
async fn test_upload_is_not_retried() {
    let node = MockStorageNode::start().await;
    node.reject_uploads(503, "unavailable").await;

    let result = node.client().upload(&FileBlob::new("a", "b")).await;
    assert!(result.is_err());
    assert_eq!(node.request_count().await, 1);
}

/// A 200 answer without a hash is still a failed upload.
#[tokio::test]
async fn test_upload_without_hash_fails() {
    let node = MockStorageNode::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Name":"a","Hash":""}"#))
        .mount(node.server())
        .await;

    let result = node.client().upload(&FileBlob::new("a", "b")).await;
    assert!(matches!(result, Err(Error::UploadFailed(_))));
}

/// Nodes that report `Size` as a number still yield the hash.
#[tokio::test]
async fn test_upload_accepts_numeric_size() {
    let node = MockStorageNode::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/add"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"Name":"a","Hash":"QmX","Size":27}"#),
        )
        .mount(node.server())
        .await;

    let hash = node
        .client()
        .upload(&FileBlob::new("a", "b"))
        .await
        .expect("upload");
    assert_eq!(hash.as_str(), "QmX");
}

/// A zero timeout means no timeout, not an instant failure.
#[tokio::test]
async fn test_zero_timeout_disables_timeout() {
    let node = MockStorageNode::start().await;
    node.accept_uploads(TEST_HASH).await;
    node.serve(TEST_HASH, b"payload").await;

    let client = StorageClient::new(&SdkConfig {
        timeout_secs: 0,
        ..node.config()
    });

    let hash = client
        .upload(&FileBlob::new("a.txt", "payload"))
        .await
        .expect("upload");
    assert_eq!(hash.as_str(), TEST_HASH);

    let content = client.fetch(hash.as_str()).await.expect("fetch");
    assert_eq!(&content[..], b"payload");
    assert_eq!(client.stats().failures, 0);
}

/// Resolve is pure: no request reaches the node and repeated calls agree.
#[tokio::test]
async fn test_resolve_makes_no_request() {
    let node = MockStorageNode::start().await;
    let client = node.client();

    let first = client.resolve(TEST_HASH);
    let second = client.resolve(TEST_HASH);

    assert_eq!(first, format!("{}/ipfs/{TEST_HASH}", node.url()));
    assert_eq!(first, second);
    assert_eq!(node.request_count().await, 0);
}

/// Uploaded content can be fetched back through the gateway.
#[tokio::test]
async fn test_upload_then_fetch() {
    let node = MockStorageNode::start().await;
    node.accept_uploads(TEST_HASH).await;
    node.serve(TEST_HASH, b"Hello, Internet 1.5").await;
    let client = node.client();

    let hash = client
        .upload(&FileBlob::new("test.txt", "Hello, Internet 1.5"))
        .await
        .expect("upload");
    let content = client.fetch(hash.as_str()).await.expect("fetch");

    assert_eq!(&content[..], b"Hello, Internet 1.5");

    let stats = client.stats();
    assert_eq!(stats.files_uploaded, 1);
    assert_eq!(stats.bytes_uploaded, 19);
    assert_eq!(stats.files_fetched, 1);
    assert_eq!(stats.bytes_fetched, 19);
    assert_eq!(stats.failures, 0);
}

/// Unknown hashes are reported as `NotFound`.
#[tokio::test]
async fn test_fetch_unknown_hash() {
    let node = MockStorageNode::start().await;

    let result = node.client().fetch("QmMissing").await;
    match result {
        Err(Error::NotFound(hash)) => assert_eq!(hash, "QmMissing"),
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Gateway errors other than 404 are `RetrievalFailed`.
#[tokio::test]
async fn test_fetch_gateway_error() {
    let node = MockStorageNode::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/ipfs/{TEST_HASH}")))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(node.server())
        .await;

    let result = node.client().fetch(TEST_HASH).await;
    assert!(matches!(result, Err(Error::RetrievalFailed(_))));
}
