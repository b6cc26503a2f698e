//! Parsing of raw form input
//!
//! Everything the user types is checked here before a request is built.
//! Failures carry the warning text shown to the user.

use crate::error::{TellerError, TellerResult};
use crate::models::{AccountNumber, Money, MoneyParseError};
use crate::protocol::Movement;

pub const INVALID_VALUES: &str = "Please enter valid values";
pub const INVALID_ACCOUNT_NUMBER: &str = "Please enter a valid account number";
pub const INVALID_INITIAL_BALANCE: &str = "Please enter a valid initial balance";
pub const TOO_MANY_DECIMALS: &str = "Amounts can have at most two decimal places";

/// Validated create-account input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub initial_balance: Money,
}

impl NewAccount {
    /// The name is trimmed and sent as is; the balance must parse
    pub fn parse(name: &str, initial_balance: &str) -> TellerResult<Self> {
        let initial_balance = Money::parse(initial_balance)
            .map_err(|err| amount_error(err, INVALID_INITIAL_BALANCE))?;

        Ok(Self {
            name: name.trim().to_string(),
            initial_balance,
        })
    }
}

/// Validated deposit/withdraw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub movement: Movement,
    pub account_number: AccountNumber,
    pub amount: Money,
}

impl MovementInput {
    /// Account number and amount must parse, the amount must be positive
    pub fn parse(movement: &str, account_number: &str, amount: &str) -> TellerResult<Self> {
        let invalid = || TellerError::Validation(INVALID_VALUES.into());

        let movement = Movement::parse(movement).ok_or_else(invalid)?;
        let account_number = AccountNumber::parse(account_number).map_err(|_| invalid())?;
        let amount = Money::parse(amount).map_err(|err| amount_error(err, INVALID_VALUES))?;
        ensure_positive(amount)?;

        Ok(Self {
            movement,
            account_number,
            amount,
        })
    }
}

/// Excess precision gets its own warning; any other parse failure uses `fallback`
fn amount_error(err: MoneyParseError, fallback: &str) -> TellerError {
    match err {
        MoneyParseError::TooPrecise(_) => TellerError::Validation(TOO_MANY_DECIMALS.into()),
        _ => TellerError::Validation(fallback.into()),
    }
}

/// Parse the balance-check account number
pub fn account_number(raw: &str) -> TellerResult<AccountNumber> {
    AccountNumber::parse(raw).map_err(|_| TellerError::Validation(INVALID_ACCOUNT_NUMBER.into()))
}

/// Reject zero and negative movement amounts
pub fn ensure_positive(amount: Money) -> TellerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(TellerError::Validation(INVALID_VALUES.into()))
    }
}
