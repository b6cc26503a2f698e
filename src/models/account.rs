//! Account model
//!
//! An account exactly as the ledger endpoint reports it.

use serde::{Deserialize, Serialize};

use super::ids::AccountNumber;
use super::money::Money;

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned account number
    pub account_number: AccountNumber,

    /// Account holder
    #[serde(default)]
    pub customer_name: String,

    /// Current balance; may be negative when overdrawn
    pub balance: Money,
}

impl Account {
    pub fn new(
        account_number: impl Into<AccountNumber>,
        customer_name: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            balance,
        }
    }

    /// Whether the balance is below zero
    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_negative()
    }
}

/// Order accounts by ascending account number, whatever order the server used
pub fn sort_by_number(accounts: &mut [Account]) {
    accounts.sort_by_key(|a| a.account_number);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_wire() {
        let json = r#"{"account_number":7,"customer_name":"Asha","balance":500.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_number.get(), 7);
        assert_eq!(account.customer_name, "Asha");
        assert_eq!(account.balance, Money::from_cents(50000));
        assert!(!account.is_overdrawn());
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let json = r#"{"account_number":3,"balance":-20}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.customer_name.is_empty());
        assert!(account.is_overdrawn());
    }

    #[test]
    fn test_sort_by_number() {
        let mut accounts = vec![
            Account::new(5, "E", Money::zero()),
            Account::new(1, "A", Money::zero()),
            Account::new(3, "C", Money::zero()),
        ];
        sort_by_number(&mut accounts);
        let order: Vec<i64> = accounts.iter().map(|a| a.account_number.get()).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }
}
