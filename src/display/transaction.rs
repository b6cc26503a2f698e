//! Transaction display formatting
//!
//! Turns transactions into table rows for the history panel, newest first.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{Formatter, NO_TRANSACTIONS};
use crate::models::transaction::sort_newest_first;
use crate::models::Transaction;

/// One rendered row of the transactions table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "Date & Time")]
    pub when: String,
    #[tabled(rename = "Account #")]
    pub account_number: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    /// Money left the account
    #[tabled(skip)]
    pub outflow: bool,
}

/// Sort transactions newest first and format each one
pub fn transaction_rows(
    mut transactions: Vec<Transaction>,
    formatter: &Formatter,
) -> Vec<TransactionRow> {
    sort_newest_first(&mut transactions);

    transactions
        .into_iter()
        .map(|txn| TransactionRow {
            when: formatter.timestamp(txn.timestamp.as_deref()),
            account_number: txn.account_number.to_string(),
            amount: formatter.signed_amount(&txn.kind, txn.amount),
            outflow: txn.kind.is_outflow(),
            kind: txn.kind.to_string(),
        })
        .collect()
}

/// Format rows as a text table for terminal output
pub fn format_transaction_table(rows: &[TransactionRow]) -> String {
    if rows.is_empty() {
        return format!("{}.", NO_TRANSACTIONS);
    }

    Table::new(rows).with(Style::modern()).to_string()
}
