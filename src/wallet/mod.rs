//! Wallet sign-in for internet15-sdk.
//!
//! The host injects a [`WalletCapability`] through an [`Environment`]. The
//! [`WalletConnector`] asks it to connect and returns the account identifier
//! as a string. Nothing about the connection is stored.
//!
//! # Example
//!
//! ```rust,no_run
//! use internet15_sdk::wallet::{Environment, StaticWallet, WalletConnector, WalletPublicKey};
//! use std::sync::Arc;
//!
//! # async fn example() -> internet15_sdk::Result<()> {
//! let key = WalletPublicKey::new([1u8; 32]);
//! let env = Environment::with_wallet(Arc::new(StaticWallet::new(key)));
//!
//! let identifier = WalletConnector::new(env).connect().await?;
//! println!("Signed in as {identifier}");
//! # Ok(())
//! # }
//! ```

mod capability;
mod connector;
mod key;

pub use capability::{ConnectResponse, Environment, StaticWallet, WalletCapability, WalletError};
pub use connector::WalletConnector;
pub use key::{parse_public_key, WalletIdentifier, WalletPublicKey, PUBLIC_KEY_LEN};
