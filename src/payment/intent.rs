//! Payment intents: storage payments that have been drafted but not sent.

use super::ledger::LedgerConnection;
use crate::wallet::WalletIdentifier;
use std::fmt;

/// Lifecycle state of a payment intent.
///
/// Drafting is the only state. Signing and submission are not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentState {
    /// Built in memory; carries no instructions or signatures.
    #[default]
    Drafted,
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drafted => f.write_str("drafted"),
        }
    }
}

/// An unsigned, unsent payment for storage.
///
/// Neither the payer nor the amount is validated.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    payer: WalletIdentifier,
    amount: f64,
    ledger: LedgerConnection,
    state: PaymentState,
}

impl PaymentIntent {
    pub(crate) fn draft(payer: WalletIdentifier, amount: f64, ledger: LedgerConnection) -> Self {
        Self {
            payer,
            amount,
            ledger,
            state: PaymentState::Drafted,
        }
    }

    /// Account that would pay.
    #[must_use]
    pub fn payer(&self) -> &WalletIdentifier {
        &self.payer
    }

    /// Amount in SOL, exactly as supplied.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Ledger the payment would be sent to.
    #[must_use]
    pub fn ledger(&self) -> &LedgerConnection {
        &self.ledger
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PaymentState {
        self.state
    }
}

impl fmt::Display for PaymentIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} payment: {} pays {} SOL via {} (unsigned, not submitted)",
            self.state, self.payer, self.amount, self.ledger
        )
    }
}
