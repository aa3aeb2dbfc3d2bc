//! Wallet connector: turns an injected capability into an account identifier.

use super::capability::{Environment, WalletCapability};
use super::key::WalletIdentifier;
use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Connects to the wallet exposed by an [`Environment`].
#[derive(Debug, Clone)]
pub struct WalletConnector {
    env: Environment,
}

impl WalletConnector {
    /// Create a connector over the given environment.
    #[must_use]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Connect and return the account identifier.
    ///
    /// The identifier is exactly the string form of the public key the
    /// wallet returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityUnavailable`] if the environment has no
    /// wallet. Errors from the wallet's own connect are returned unchanged
    /// as [`Error::Wallet`].
    pub async fn connect(&self) -> Result<WalletIdentifier> {
        let wallet = self.capability()?;

        debug!("Requesting wallet connection (phantom={})", wallet.is_phantom());
        let response = wallet.connect().await?;

        let identifier = WalletIdentifier::from(response.public_key);
        info!("Wallet connected: {identifier}");
        Ok(identifier)
    }

    /// Disconnect the wallet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityUnavailable`] if the environment has no
    /// wallet, or the wallet's own error unchanged.
    pub async fn disconnect(&self) -> Result<()> {
        let wallet = self.capability()?;
        wallet.disconnect().await?;
        info!("Wallet disconnected");
        Ok(())
    }

    /// Whether the injected wallet reports itself as Phantom.
    ///
    /// `false` when there is no wallet.
    #[must_use]
    pub fn is_phantom(&self) -> bool {
        self.env.wallet().is_some_and(|w| w.is_phantom())
    }

    fn capability(&self) -> Result<&Arc<dyn WalletCapability>> {
        self.env.wallet().ok_or(Error::CapabilityUnavailable)
    }
}
