//! Transaction model
//!
//! Transactions are immutable records received from the ledger endpoint.
//! The timestamp is kept as the raw text the server sent so that the display
//! layer can tell "absent" apart from "unparseable".

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountNumber;
use super::money::Money;

/// Kind of ledger movement
///
/// The endpoint labels movements with free text. `Deposit` and `Withdrawal`
/// are the two it documents; anything else (it also records "Account
/// Created") is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Other(String),
}

impl TransactionKind {
    /// Whether money left the account
    pub fn is_outflow(&self) -> bool {
        matches!(self, Self::Withdrawal)
    }
}

impl From<String> for TransactionKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Deposit" => Self::Deposit,
            "Withdrawal" => Self::Withdrawal,
            _ => Self::Other(label),
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
            Self::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A transaction as reported by the ledger endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server timestamp, verbatim
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Account the movement applies to
    pub account_number: AccountNumber,

    /// Deposit, withdrawal, or another server label
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Unsigned amount moved
    pub amount: Money,
}

impl Transaction {
    pub fn new(
        timestamp: Option<&str>,
        account_number: impl Into<AccountNumber>,
        kind: TransactionKind,
        amount: Money,
    ) -> Self {
        Self {
            timestamp: timestamp.map(str::to_string),
            account_number: account_number.into(),
            kind,
            amount,
        }
    }

    /// The parsed timestamp, if present and well-formed
    pub fn instant(&self) -> Option<Timestamp> {
        self.timestamp.as_deref().and_then(Timestamp::parse)
    }
}

/// A parsed server timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Carries an explicit offset (RFC 3339)
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time with no zone, as the endpoint writes it
    Naive(NaiveDateTime),
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    /// Parse any of the timestamp forms the endpoint is known to send
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Zoned(zoned));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self::Naive(naive));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::Naive)
    }

    /// Key used to order transactions
    ///
    /// Zoned values compare by their UTC instant, naive values by wall clock.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            Self::Zoned(zoned) => zoned.naive_utc(),
            Self::Naive(naive) => *naive,
        }
    }
}

/// Order transactions newest first
///
/// Entries whose timestamp is missing or unparseable sort after every dated
/// entry, keeping their relative server order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        let a = a.instant().map(|t| t.sort_key());
        let b = b.instant().map(|t| t.sort_key());
        b.cmp(&a)
    });
}
