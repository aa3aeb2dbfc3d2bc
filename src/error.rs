//! Error types for internet15-sdk.

use crate::wallet::WalletError;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in internet15-sdk.
#[derive(Error, Debug)]
pub enum Error {
    /// No wallet capability is present in the environment.
    #[error("wallet capability unavailable")]
    CapabilityUnavailable,

    /// Error raised by the wallet capability itself.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Upload to the storage endpoint failed.
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// Retrieval from the storage gateway failed.
    #[error("retrieval failed: {0}")]
    RetrievalFailed(String),

    /// The gateway has no content for the requested hash.
    #[error("content not found: {0}")]
    NotFound(String),

    /// Ledger connection could not be constructed.
    #[error("ledger error: {0}")]
    Ledger(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
