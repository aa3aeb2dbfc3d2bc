//! Account keys and identifiers handed out by wallet capabilities.
//!
//! Ledger accounts are 32-byte public keys whose canonical string form is
//! base58. The SDK only ever passes that string form around, as a
//! [`WalletIdentifier`].

use super::WalletError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of an account public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Longest base58 rendering of a 32-byte key.
const MAX_BASE58_LEN: usize = 44;

/// A public account key returned by a wallet capability.
///
/// Displays as base58, the ledger's account encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletPublicKey([u8; PUBLIC_KEY_LEN]);

impl WalletPublicKey {
    /// Wrap raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }
}

impl fmt::Display for WalletPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl FromStr for WalletPublicKey {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_public_key(s)
    }
}

/// Parse a base58 account key.
///
/// # Errors
///
/// Returns [`WalletError::InvalidPublicKey`] if the string is not base58 or
/// does not decode to exactly 32 bytes.
pub fn parse_public_key(key: &str) -> Result<WalletPublicKey, WalletError> {
    if key.is_empty() || key.len() > MAX_BASE58_LEN {
        return Err(WalletError::InvalidPublicKey(format!(
            "expected 1 to {MAX_BASE58_LEN} base58 characters, got {}",
            key.len()
        )));
    }

    let bytes = bs58::decode(key)
        .into_vec()
        .map_err(|e| WalletError::InvalidPublicKey(format!("{key}: {e}")))?;

    let bytes: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
        WalletError::InvalidPublicKey(format!(
            "expected {PUBLIC_KEY_LEN} bytes, got {}",
            v.len()
        ))
    })?;

    Ok(WalletPublicKey(bytes))
}

/// Opaque public account identifier produced by a successful connect.
///
/// Never validated: any string the caller supplies is accepted where an
/// identifier is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletIdentifier(String);

impl WalletIdentifier {
    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WalletIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for WalletIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WalletIdentifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<WalletPublicKey> for WalletIdentifier {
    fn from(key: WalletPublicKey) -> Self {
        Self(key.to_string())
    }
}
