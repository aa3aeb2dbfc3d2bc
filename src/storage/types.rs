//! Data types for content-addressed storage.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Content hash returned by the storage node after upload.
///
/// Opaque: the SDK neither parses nor validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// The hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the hash, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A named binary payload to upload.
#[derive(Debug, Clone)]
pub struct FileBlob {
    /// File name sent alongside the content.
    pub name: String,
    /// Raw file content.
    pub content: Bytes,
    /// Optional MIME type. The endpoint treats untyped parts as octet streams.
    pub mime_type: Option<String>,
}

impl FileBlob {
    /// Create a blob from a name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, naming the blob after the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: &Path) -> crate::Result<Self> {
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, content))
    }

    /// Size of the content in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// One entry of the IPFS `add` response.
///
/// `Size` is ignored: nodes send it as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AddResponse {
    /// Name the node recorded for the file.
    #[serde(default)]
    pub name: String,
    /// Content hash of the added file.
    pub hash: String,
}

/// Statistics about storage operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of files uploaded.
    pub files_uploaded: u64,
    /// Total bytes uploaded.
    pub bytes_uploaded: u64,
    /// Number of files fetched.
    pub files_fetched: u64,
    /// Total bytes fetched.
    pub bytes_fetched: u64,
    /// Number of failed uploads and fetches.
    pub failures: u64,
}
