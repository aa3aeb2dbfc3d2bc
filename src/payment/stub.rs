//! Storage payment stub.

use super::intent::PaymentIntent;
use super::ledger::LedgerConnection;
use crate::config::SdkConfig;
use crate::error::Result;
use crate::wallet::WalletIdentifier;
use tracing::info;

/// Drafts storage payments without signing or sending them.
#[derive(Debug, Clone)]
pub struct PaymentStub {
    /// Ledger RPC endpoint address, as configured.
    blockchain_rpc: String,
}

impl PaymentStub {
    /// Create a payment stub from configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            blockchain_rpc: config.blockchain_rpc.clone(),
        }
    }

    /// Draft a payment of `amount` SOL from `identifier` to the storage node.
    ///
    /// Opens a fresh ledger connection handle on every call. Neither input is
    /// validated, so any identifier and any amount (zero, negative, NaN) are
    /// accepted. The only effect is one log line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Ledger`] if the configured RPC endpoint is not
    /// an `http`/`https` URL.
    pub fn build_payment(&self, identifier: &str, amount: f64) -> Result<PaymentIntent> {
        let ledger = LedgerConnection::new(&self.blockchain_rpc)?;
        let payer = WalletIdentifier::from(identifier);

        info!("User {payer} pays {amount} SOL");

        Ok(PaymentIntent::draft(payer, amount, ledger))
    }
}
