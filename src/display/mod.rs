//! Display formatting
//!
//! Formats server data for the presentation surfaces: pure value formatters
//! plus row builders for the accounts and transactions tables and the
//! balance panel.

pub mod account;
pub mod balance;
pub mod format;
pub mod transaction;

pub use account::{account_rows, format_account_table, AccountRow};
pub use balance::BalancePanel;
pub use format::{BalanceText, Formatter};
pub use transaction::{format_transaction_table, transaction_rows, TransactionRow};
