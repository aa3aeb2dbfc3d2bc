//! Ledger RPC connection handle.

use crate::error::{Error, Result};
use std::fmt;
use tracing::trace;
use url::Url;

/// Handle on a ledger JSON-RPC endpoint.
///
/// Construction only validates the address. No request is ever sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConnection {
    endpoint: Url,
}

impl LedgerConnection {
    /// Open a connection handle on `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ledger`] if the address is not a URL or its scheme
    /// is not `http` or `https`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Ledger(format!("invalid RPC endpoint {endpoint:?}: {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Ledger(format!(
                "endpoint URL must start with `http:` or `https:`, got {endpoint}"
            )));
        }

        trace!("Ledger connection handle created for {endpoint}");
        Ok(Self { endpoint })
    }

    /// The RPC endpoint address.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Display for LedgerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}
