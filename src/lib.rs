//! # internet15-sdk
//!
//! A thin client SDK for wallet sign-in, content-addressed file storage and
//! storage payments.
//!
//! This crate is a contract layer over external parties:
//! - Wallet sign-in via an injected [`wallet::WalletCapability`]
//! - File upload and retrieval via an IPFS node's HTTP API and gateway
//! - Payment drafting against a ledger JSON-RPC endpoint (never submitted)
//!
//! The three components share no state. The caller passes the wallet
//! identifier into the payment stub.
//!
//! ## Example
//!
//! ```rust,no_run
//! use internet15_sdk::{Environment, PaymentStub, SdkConfig, StorageClient, WalletConnector};
//! use internet15_sdk::storage::FileBlob;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SdkConfig::default().with_env_overrides();
//!
//!     // The host injects its wallet here; an empty environment has none.
//!     let identifier = WalletConnector::new(Environment::empty()).connect().await?;
//!
//!     let storage = StorageClient::new(&config);
//!     let hash = storage.upload(&FileBlob::new("hello.txt", "Hello")).await?;
//!     println!("{}", storage.resolve(hash.as_str()));
//!
//!     let intent = PaymentStub::new(&config).build_payment(identifier.as_str(), 0.01)?;
//!     println!("{intent}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod payment;
pub mod storage;
pub mod wallet;

pub use config::SdkConfig;
pub use error::{Error, Result};
pub use payment::{LedgerConnection, PaymentIntent, PaymentState, PaymentStub};
pub use storage::{ContentHash, FileBlob, StorageClient, StorageStats};
pub use wallet::{
    Environment, StaticWallet, WalletCapability, WalletConnector, WalletError, WalletIdentifier,
    WalletPublicKey,
};
