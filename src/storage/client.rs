//! HTTP client for an IPFS storage node.
//!
//! Uploads go through the node's HTTP API (`POST /api/v0/add`). Retrieval
//! goes through its gateway (`GET /ipfs/<hash>`).

use super::types::{AddResponse, ContentHash, FileBlob, StorageStats};
use crate::config::SdkConfig;
use crate::error::{Error, Result};
use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path of the IPFS API add call, relative to the node URL.
const ADD_PATH: &str = "/api/v0/add";

/// Path prefix of gateway retrieval, relative to the node URL.
const GATEWAY_PATH: &str = "/ipfs/";

/// Multipart field the add call reads the file from.
const FILE_FIELD: &str = "file";

/// Client for uploading to and retrieving from a storage node.
///
/// Holds one HTTP client for its whole lifetime. Failed requests are never
/// retried.
pub struct StorageClient {
    /// Base URL of the storage node.
    base_url: String,
    /// Request timeout.
    timeout: Duration,
    /// HTTP client for API and gateway requests.
    client: reqwest::Client,
    /// Operation statistics.
    stats: RwLock<StorageStats>,
}

impl StorageClient {
    /// Create a storage client from configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("internet15-sdk/", env!("CARGO_PKG_VERSION")));
        // Zero disables the request timeout.
        if config.timeout_secs > 0 {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        debug!(
            "Creating storage client (node={}, timeout={}s)",
            config.storage_node_url, config.timeout_secs
        );

        Self {
            base_url: config.storage_node_url.clone(),
            timeout,
            client,
            stats: RwLock::new(StorageStats::default()),
        }
    }

    /// Base URL of the storage node.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a file and return its content hash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UploadFailed`] on any transport error, non-success
    /// status, unreadable response, or empty hash.
    pub async fn upload(&self, file: &FileBlob) -> Result<ContentHash> {
        debug!("Uploading {} ({} bytes)", file.name, file.size());

        let result = self.try_upload(file).await;
        match &result {
            Ok(hash) => {
                let mut stats = self.stats.write();
                stats.files_uploaded += 1;
                stats.bytes_uploaded += file.size() as u64;
                info!("Uploaded {} as {hash}", file.name);
            }
            Err(e) => {
                self.stats.write().failures += 1;
                warn!("Upload of {} failed: {e}", file.name);
            }
        }
        result
    }

    async fn try_upload(&self, file: &FileBlob) -> Result<ContentHash> {
        let url = format!("{}{ADD_PATH}", self.base_url);

        let mut part = Part::stream_with_length(file.content.clone(), file.size() as u64)
            .file_name(file.name.clone());
        if let Some(ref mime) = file.mime_type {
            part = part
                .mime_str(mime)
                .map_err(|e| Error::UploadFailed(format!("invalid MIME type {mime}: {e}")))?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::UploadFailed(describe_transport_error(&e, self.timeout)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::UploadFailed(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Error::UploadFailed(format!(
                "storage node returned {status}: {}",
                body.trim()
            )));
        }

        let added = parse_add_response(&body)?;
        debug!("Node recorded {} as {}", added.name, added.hash);
        Ok(ContentHash::from(added.hash))
    }

    /// Build the retrieval URL for a hash.
    ///
    /// Pure concatenation of the node URL, `/ipfs/` and the hash. Makes no
    /// network call and does not check that the hash exists.
    #[must_use]
    pub fn resolve(&self, hash: &str) -> String {
        format!("{}{GATEWAY_PATH}{hash}", self.base_url)
    }

    /// Download the content behind a hash through the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the gateway answers 404, and
    /// [`Error::RetrievalFailed`] on any other failure.
    pub async fn fetch(&self, hash: &str) -> Result<Bytes> {
        let url = self.resolve(hash);
        debug!("Fetching {url}");

        let result = self.try_fetch(&url, hash).await;
        match &result {
            Ok(content) => {
                let mut stats = self.stats.write();
                stats.files_fetched += 1;
                stats.bytes_fetched += content.len() as u64;
                debug!("Fetched {hash} ({} bytes)", content.len());
            }
            Err(e) => {
                self.stats.write().failures += 1;
                warn!("Fetch of {hash} failed: {e}");
            }
        }
        result
    }

    async fn try_fetch(&self, url: &str, hash: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::RetrievalFailed(describe_transport_error(&e, self.timeout)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(hash.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RetrievalFailed(format!(
                "gateway returned {status}: {}",
                body.trim()
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| Error::RetrievalFailed(format!("failed to read body: {e}")))
    }

    /// Snapshot of the client's statistics.
    #[must_use]
    pub fn stats(&self) -> StorageStats {
        self.stats.read().clone()
    }
}

/// Parse the add response body.
///
/// The node may stream one JSON object per line; the last one describes the
/// file itself.
fn parse_add_response(body: &str) -> Result<AddResponse> {
    let line = body
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| Error::UploadFailed("storage node returned an empty response".into()))?;

    let added: AddResponse = serde_json::from_str(line)
        .map_err(|e| Error::UploadFailed(format!("unreadable add response: {e}")))?;

    if added.hash.is_empty() {
        return Err(Error::UploadFailed("storage node returned an empty hash".into()));
    }
    Ok(added)
}

fn describe_transport_error(e: &reqwest::Error, timeout: Duration) -> String {
    if e.is_timeout() {
        format!("timed out after {}s", timeout.as_secs())
    } else {
        e.to_string()
    }
}
