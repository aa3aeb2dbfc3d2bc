//! Storage payments for internet15-sdk.
//!
//! Payments are drafted only:
//!
//! ```text
//! build_payment(identifier, amount)
//!        │
//!        ▼
//! ┌─────────────────────────┐
//! │ Open LedgerConnection   │  (from BLOCKCHAIN_RPC, no request sent)
//! └───────────┬─────────────┘
//!             ▼
//! ┌─────────────────────────┐
//! │ Log "User X pays N SOL" │
//! └───────────┬─────────────┘
//!             ▼
//!   PaymentIntent (Drafted)
//! ```
//!
//! The intent holds no transfer instructions. It is never signed, never
//! submitted and never persisted.

mod intent;
mod ledger;
mod stub;

pub use intent::{PaymentIntent, PaymentState};
pub use ledger::LedgerConnection;
pub use stub::PaymentStub;
