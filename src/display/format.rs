//! Value formatting
//!
//! Pure functions turning server values into display strings. Nothing here
//! does arithmetic on the ledger; amounts are shown exactly as received.

use std::fmt;

use chrono::{Local, TimeZone};

use crate::models::{Money, Timestamp, TransactionKind};

/// Shown for a missing timestamp or customer name
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown for a timestamp that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";
/// Annotation on negative balances
pub const OVERDRAWN: &str = "Overdrawn";
/// Empty accounts table placeholder
pub const NO_ACCOUNTS: &str = "No accounts found";
/// Empty transactions table placeholder
pub const NO_TRANSACTIONS: &str = "No transactions found";

/// Month name, day, year, 12-hour time with seconds
const TIMESTAMP_STYLE: &str = "%b %-d, %Y, %I:%M:%S %p";

/// An amount with its currency glyph and two fraction digits
pub fn currency(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// A transaction amount with a `+` (money in) or `-` (money out) prefix
pub fn signed_amount(kind: &TransactionKind, amount: Money, symbol: &str) -> String {
    let prefix = if kind.is_outflow() { '-' } else { '+' };
    format!("{}{}", prefix, currency(amount.abs(), symbol))
}

/// A server timestamp in the local time zone
pub fn timestamp(raw: Option<&str>) -> String {
    timestamp_in(raw, &Local)
}

/// A server timestamp rendered in `tz`
///
/// Zone-less timestamps are wall-clock values and are rendered unchanged.
pub fn timestamp_in<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return NOT_AVAILABLE.to_string(),
    };

    match Timestamp::parse(raw) {
        Some(Timestamp::Zoned(zoned)) => zoned
            .with_timezone(tz)
            .format(TIMESTAMP_STYLE)
            .to_string(),
        Some(Timestamp::Naive(naive)) => naive.format(TIMESTAMP_STYLE).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// A balance styled for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceText {
    /// Absolute amount with currency glyph
    pub amount: String,
    /// Whether the balance is below zero
    pub overdrawn: bool,
}

impl fmt::Display for BalanceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overdrawn {
            write!(f, "{} ({})", self.amount, OVERDRAWN)
        } else {
            write!(f, "{}", self.amount)
        }
    }
}

/// Style a balance: negative balances show their absolute value, flagged
pub fn balance(amount: Money, symbol: &str) -> BalanceText {
    BalanceText {
        amount: currency(amount.abs(), symbol),
        overdrawn: amount.is_negative(),
    }
}

/// Formatter bound to a currency symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new("₹")
    }
}

impl Formatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn currency(&self, amount: Money) -> String {
        currency(amount, &self.symbol)
    }

    pub fn signed_amount(&self, kind: &TransactionKind, amount: Money) -> String {
        signed_amount(kind, amount, &self.symbol)
    }

    pub fn balance(&self, amount: Money) -> BalanceText {
        balance(amount, &self.symbol)
    }

    pub fn timestamp(&self, raw: Option<&str>) -> String {
        timestamp(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_currency() {
        assert_eq!(currency(Money::from_cents(123450), "₹"), "₹1234.50");
        assert_eq!(currency(Money::zero(), "₹"), "₹0.00");
        assert_eq!(currency(Money::from_cents(7), "₹"), "₹0.07");
        assert_eq!(currency(Money::from_cents(-10000), "₹"), "-₹100.00");
    }

    #[test]
    fn test_currency_always_two_fraction_digits() {
        for cents in [0, 1, 10, 99, 100, 123456789, -5, -12345] {
            let text = currency(Money::from_cents(cents), "₹");
            let fraction = text.rsplit('.').next().unwrap();
            assert_eq!(fraction.len(), 2, "{}", text);
            assert!(text.trim_start_matches('-').starts_with('₹'));
        }
    }

    #[test]
    fn test_signed_amount() {
        let symbol = "₹";
        assert_eq!(
            signed_amount(&TransactionKind::Deposit, Money::from_cents(10000), symbol),
            "+₹100.00"
        );
        assert_eq!(
            signed_amount(&TransactionKind::Withdrawal, Money::from_cents(5000), symbol),
            "-₹50.00"
        );
        assert_eq!(
            signed_amount(
                &TransactionKind::Other("Account Created".into()),
                Money::from_cents(50000),
                symbol
            ),
            "+₹500.00"
        );
    }

    #[test]
    fn test_timestamp_markers() {
        assert_eq!(timestamp(None), "N/A");
        assert_eq!(timestamp(Some("")), "N/A");
        assert_eq!(timestamp(Some("not a date")), "Invalid Date");
    }

    #[test]
    fn test_timestamp_style() {
        assert_eq!(
            timestamp(Some("2024-01-05 15:04:05")),
            "Jan 5, 2024, 03:04:05 PM"
        );
        assert_eq!(
            timestamp_in(Some("2024-03-10T09:08:07Z"), &Utc),
            "Mar 10, 2024, 09:08:07 AM"
        );
        assert_eq!(
            timestamp_in(Some("2024-03-10T09:08:07+05:30"), &Utc),
            "Mar 10, 2024, 03:38:07 AM"
        );
    }

    #[test]
    fn test_balance_styling() {
        let overdrawn = balance(Money::from_cents(-2000), "₹");
        assert!(overdrawn.overdrawn);
        assert_eq!(overdrawn.amount, "₹20.00");
        assert_eq!(overdrawn.to_string(), "₹20.00 (Overdrawn)");

        let plain = balance(Money::from_cents(2000), "₹");
        assert!(!plain.overdrawn);
        assert_eq!(plain.to_string(), "₹20.00");
    }

    #[test]
    fn test_balance_at_i64_floor() {
        let extreme = balance(Money::from_cents(i64::MIN), "₹");
        assert!(extreme.overdrawn);
        assert_eq!(extreme.amount, "₹92233720368547758.07");
    }

    #[test]
    fn test_formatter_uses_symbol() {
        let formatter = Formatter::new("$");
        assert_eq!(formatter.currency(Money::from_cents(150)), "$1.50");
        assert_eq!(formatter.balance(Money::from_cents(-150)).amount, "$1.50");
    }
}
