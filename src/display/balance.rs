//! Balance panel states

use std::fmt;

use super::format::{BalanceText, Formatter};
use crate::models::{AccountNumber, Money};

/// Shown when the endpoint does not know the account
pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

/// What the balance panel displays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BalancePanel {
    /// Nothing checked yet
    #[default]
    Blank,
    /// A balance received from the endpoint
    Balance {
        account_number: AccountNumber,
        balance: BalanceText,
    },
    /// The endpoint rejected the inquiry
    NotFound,
}

impl BalancePanel {
    pub fn balance(account_number: AccountNumber, amount: Money, formatter: &Formatter) -> Self {
        Self::Balance {
            account_number,
            balance: formatter.balance(amount),
        }
    }

    /// The account shown, if the panel shows one
    pub fn account_number(&self) -> Option<AccountNumber> {
        match self {
            Self::Balance { account_number, .. } => Some(*account_number),
            _ => None,
        }
    }
}

impl fmt::Display for BalancePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Balance {
                account_number,
                balance,
            } => write!(f, "Account #{}: {}", account_number, balance),
            Self::NotFound => write!(f, "{}", ACCOUNT_NOT_FOUND),
        }
    }
}
