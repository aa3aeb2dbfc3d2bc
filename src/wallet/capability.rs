//! The injected wallet capability and the environment that carries it.

use super::key::WalletPublicKey;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by a wallet capability.
///
/// The connector hands these to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user declined the request.
    #[error("user rejected the request: {0}")]
    Rejected(String),

    /// The operation needs an active connection.
    #[error("wallet not connected")]
    NotConnected,

    /// Any other failure inside the wallet provider.
    #[error("wallet provider error: {0}")]
    Provider(String),

    /// A public key string could not be decoded.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// Answer to a successful connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectResponse {
    /// The account key the user authorised.
    pub public_key: WalletPublicKey,
}

/// A wallet provided by the host environment.
///
/// Implementations wrap whatever actually holds the user's keys: a browser
/// extension bridge, a hardware wallet, or a fixed key for headless use.
#[async_trait]
pub trait WalletCapability: Send + Sync {
    /// Ask the wallet to connect. May prompt the user.
    async fn connect(&self) -> Result<ConnectResponse, WalletError>;

    /// Drop the connection.
    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Whether this wallet identifies itself as Phantom.
    fn is_phantom(&self) -> bool {
        false
    }
}

/// Capabilities injected by the host.
///
/// A missing wallet is an ordinary value here, built with
/// [`Environment::empty`].
#[derive(Clone, Default)]
pub struct Environment {
    wallet: Option<Arc<dyn WalletCapability>>,
}

impl Environment {
    /// An environment with no wallet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An environment exposing the given wallet.
    #[must_use]
    pub fn with_wallet(wallet: Arc<dyn WalletCapability>) -> Self {
        Self {
            wallet: Some(wallet),
        }
    }

    /// The injected wallet, if any.
    #[must_use]
    pub fn wallet(&self) -> Option<&Arc<dyn WalletCapability>> {
        self.wallet.as_ref()
    }

    /// Check if a wallet is present.
    #[must_use]
    pub fn has_wallet(&self) -> bool {
        self.wallet.is_some()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("has_wallet", &self.has_wallet())
            .finish()
    }
}

/// Wallet that always connects with one fixed key.
#[derive(Debug, Clone)]
pub struct StaticWallet {
    public_key: WalletPublicKey,
    phantom: bool,
}

impl StaticWallet {
    /// Create a wallet answering with `public_key`.
    #[must_use]
    pub fn new(public_key: WalletPublicKey) -> Self {
        Self {
            public_key,
            phantom: false,
        }
    }

    /// Report the Phantom flag as set.
    #[must_use]
    pub fn as_phantom(mut self) -> Self {
        self.phantom = true;
        self
    }
}

#[async_trait]
impl WalletCapability for StaticWallet {
    async fn connect(&self) -> Result<ConnectResponse, WalletError> {
        debug!("Static wallet connect: {}", self.public_key);
        Ok(ConnectResponse {
            public_key: self.public_key,
        })
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        debug!("Static wallet disconnect");
        Ok(())
    }

    fn is_phantom(&self) -> bool {
        self.phantom
    }
}
