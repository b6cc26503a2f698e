//! Data models for Teller
//!
//! The shapes the ledger endpoint returns. None of them are created or
//! mutated locally; they are decoded from responses and rendered.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use ids::AccountNumber;
pub use money::{Money, MoneyParseError};
pub use transaction::{Timestamp, Transaction, TransactionKind};
