//! Content-addressed storage for internet15-sdk.
//!
//! Files are uploaded to an IPFS node and addressed afterwards only by the
//! content hash the node returns.
//!
//! ```text
//! upload(FileBlob) ──▶ POST {node}/api/v0/add ──▶ ContentHash
//! resolve(hash)    ──▶ "{node}/ipfs/{hash}"        (no I/O)
//! fetch(hash)      ──▶ GET  {node}/ipfs/{hash} ──▶ Bytes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use internet15_sdk::config::SdkConfig;
//! use internet15_sdk::storage::{FileBlob, StorageClient};
//!
//! # async fn example() -> internet15_sdk::Result<()> {
//! let client = StorageClient::new(&SdkConfig::default());
//!
//! let hash = client.upload(&FileBlob::new("hello.txt", "Hello")).await?;
//! println!("{}", client.resolve(hash.as_str()));
//! # Ok(())
//! # }
//! ```

mod client;
mod types;

pub use client::StorageClient;
pub use types::{ContentHash, FileBlob, StorageStats};
