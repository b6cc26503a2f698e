//! Response payloads
//!
//! The endpoint answers every action with the same flat object; which result
//! field is populated depends on the action. A status other than
//! [`SUCCESS`] is a business failure and may carry a `message`.

use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountNumber, Money, Transaction};

/// Status value of a successful response
pub const SUCCESS: &str = "success";

/// A response from the ledger endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Set by `create_account`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<AccountNumber>,

    /// Set by `deposit` and `withdraw`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<Money>,

    /// Set by `get_balance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,

    /// Set by `get_accounts`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,

    /// Set by `get_transactions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

impl Response {
    /// A bare success response
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_string(),
            ..Self::default()
        }
    }

    /// A failure response with the endpoint's message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_account_number(mut self, number: impl Into<AccountNumber>) -> Self {
        self.account_number = Some(number.into());
        self
    }

    pub fn with_new_balance(mut self, balance: Money) -> Self {
        self.new_balance = Some(balance);
        self
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = Some(transactions);
        self
    }

    /// Whether the endpoint reported success
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_account_number() {
        let r: Response = serde_json::from_str(r#"{"status":"success","account_number":7}"#).unwrap();
        assert!(r.is_success());
        assert_eq!(r.account_number, Some(AccountNumber::new(7)));
        assert!(r.accounts.is_none());
    }

    #[test]
    fn test_failure_with_message() {
        let r: Response =
            serde_json::from_str(r#"{"status":"error","message":"Account not found"}"#).unwrap();
        assert!(!r.is_success());
        assert_eq!(r.message.as_deref(), Some("Account not found"));
    }

    #[test]
    fn test_bare_failure_status() {
        let r: Response = serde_json::from_str(r#"{"status":"nope"}"#).unwrap();
        assert!(!r.is_success());
        assert!(r.message.is_none());
    }

    #[test]
    fn test_transactions_payload() {
        let json = r#"{
            "status": "success",
            "transactions": [
                {"account_number": 1, "type": "Deposit", "amount": 100.0, "timestamp": "2024-01-05 10:00:00"},
                {"account_number": 1, "type": "Account Created", "amount": 500.0, "timestamp": "2024-01-04 09:00:00"}
            ]
        }"#;
        let r: Response = serde_json::from_str(json).unwrap();
        assert_eq!(r.transactions.unwrap().len(), 2);
    }

    #[test]
    fn test_builder_serializes_only_set_fields() {
        let r = Response::success().with_new_balance(Money::from_cents(-10000));
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"status":"success","new_balance":-100.0}"#
        );
    }
}
