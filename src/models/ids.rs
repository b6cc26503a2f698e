//! Server-assigned identifiers
//!
//! Account numbers only ever originate from the ledger endpoint; the client
//! parses them from user input to address requests but never invents one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An account number as assigned by the ledger endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i64);

impl AccountNumber {
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Parse an account number typed by the user
    ///
    /// The whole field, minus surrounding whitespace, must be an integer.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for AccountNumber {
    fn from(number: i64) -> Self {
        Self(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(AccountNumber::parse("7").unwrap(), AccountNumber::new(7));
        assert_eq!(AccountNumber::parse(" 42 ").unwrap().get(), 42);
        assert!(AccountNumber::parse("").is_err());
        assert!(AccountNumber::parse("7a").is_err());
        assert!(AccountNumber::parse("1.5").is_err());
        assert!(AccountNumber::parse("7.0").is_err());
        assert!(AccountNumber::parse("7abc").is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let n: AccountNumber = serde_json::from_str("1001").unwrap();
        assert_eq!(n.get(), 1001);
        assert_eq!(serde_json::to_string(&n).unwrap(), "1001");
        assert_eq!(n.to_string(), "1001");
    }
}
