//! Account display formatting
//!
//! Turns accounts into table rows for the accounts panel.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{BalanceText, Formatter, NOT_AVAILABLE, NO_ACCOUNTS};
use crate::models::account::sort_by_number;
use crate::models::Account;

/// One rendered row of the accounts table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct AccountRow {
    #[tabled(rename = "Account #")]
    pub account_number: String,
    #[tabled(rename = "Customer Name")]
    pub customer_name: String,
    #[tabled(rename = "Balance")]
    pub balance: BalanceText,
}

/// Sort accounts by number and format each one
pub fn account_rows(mut accounts: Vec<Account>, formatter: &Formatter) -> Vec<AccountRow> {
    sort_by_number(&mut accounts);

    accounts
        .into_iter()
        .map(|account| AccountRow {
            account_number: account.account_number.to_string(),
            customer_name: if account.customer_name.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                account.customer_name
            },
            balance: formatter.balance(account.balance),
        })
        .collect()
}

/// Format rows as a text table for terminal output
pub fn format_account_table(rows: &[AccountRow]) -> String {
    if rows.is_empty() {
        return format!("{}.", NO_ACCOUNTS);
    }

    Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_rows_sorted_by_number() {
        let accounts = vec![
            Account::new(5, "Esha", Money::from_cents(100)),
            Account::new(1, "Asha", Money::from_cents(200)),
            Account::new(3, "Chetan", Money::from_cents(300)),
        ];
        let rows = account_rows(accounts, &Formatter::default());
        let numbers: Vec<&str> = rows.iter().map(|r| r.account_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_overdrawn_row() {
        let rows = account_rows(
            vec![Account::new(2, "Ravi", Money::from_cents(-2000))],
            &Formatter::default(),
        );
        assert_eq!(rows[0].balance.to_string(), "₹20.00 (Overdrawn)");
    }

    #[test]
    fn test_missing_name() {
        let rows = account_rows(vec![Account::new(2, "", Money::zero())], &Formatter::default());
        assert_eq!(rows[0].customer_name, "N/A");
    }

    #[test]
    fn test_format_table() {
        let rows = account_rows(
            vec![Account::new(7, "Asha", Money::from_cents(50000))],
            &Formatter::default(),
        );
        let output = format_account_table(&rows);
        assert!(output.contains("Customer Name"));
        assert!(output.contains("Asha"));
        assert!(output.contains("₹500.00"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_account_table(&[]), "No accounts found.");
    }
}
