//! Request payloads

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{AccountNumber, Money};

/// Direction of a balance movement requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    Deposit,
    Withdraw,
}

impl Movement {
    /// Wire action name
    pub fn action(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// Parse the value of the transaction-type field
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdraw" | "withdrawal" => Some(Self::Withdraw),
            _ => None,
        }
    }

    /// The other movement
    pub fn toggled(self) -> Self {
        match self {
            Self::Deposit => Self::Withdraw,
            Self::Withdraw => Self::Deposit,
        }
    }

    /// Phrase used in the success notification
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Deposit => "deposited to",
            Self::Withdraw => "withdrawn from",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// A request to the ledger endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    CreateAccount {
        name: String,
        initial_balance: Money,
    },
    Deposit {
        account_number: AccountNumber,
        amount: Money,
    },
    Withdraw {
        account_number: AccountNumber,
        amount: Money,
    },
    GetBalance {
        account_number: AccountNumber,
    },
    GetAccounts,
    GetTransactions,
}

impl Request {
    /// Build the deposit or withdraw request for a movement
    pub fn movement(movement: Movement, account_number: AccountNumber, amount: Money) -> Self {
        match movement {
            Movement::Deposit => Self::Deposit {
                account_number,
                amount,
            },
            Movement::Withdraw => Self::Withdraw {
                account_number,
                amount,
            },
        }
    }

    /// The wire action name
    pub fn action(&self) -> &'static str {
        match self {
            Self::CreateAccount { .. } => "create_account",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::GetBalance { .. } => "get_balance",
            Self::GetAccounts => "get_accounts",
            Self::GetTransactions => "get_transactions",
        }
    }
}
