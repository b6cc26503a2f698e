//! Presentation surface
//!
//! The binder never knows what the page looks like. It reads named input
//! fields and writes complete replacements of named panels through this
//! trait. The TUI and the console are the two implementations.

use crate::display::{AccountRow, BalancePanel, TransactionRow};

/// Named input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    InitialBalance,
    TransactionAccount,
    TransactionType,
    Amount,
    BalanceAccount,
}

impl Field {
    /// The form this field belongs to
    pub fn form(&self) -> Form {
        match self {
            Self::CustomerName | Self::InitialBalance => Form::CreateAccount,
            Self::TransactionAccount | Self::TransactionType | Self::Amount => Form::Transaction,
            Self::BalanceAccount => Form::BalanceCheck,
        }
    }
}

/// Input forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    CreateAccount,
    Transaction,
    BalanceCheck,
}

impl Form {
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::CreateAccount => &[Field::CustomerName, Field::InitialBalance],
            Self::Transaction => &[Field::TransactionAccount, Field::TransactionType, Field::Amount],
            Self::BalanceCheck => &[Field::BalanceAccount],
        }
    }
}

/// Where the binder reads input and renders server state
pub trait Surface {
    /// Current raw value of an input field
    fn read(&self, field: Field) -> String;

    /// Restore a form's fields to their initial values
    fn reset(&mut self, form: Form);

    /// Replace the accounts table
    fn render_accounts(&mut self, rows: Vec<AccountRow>);

    /// Replace the transactions table
    fn render_transactions(&mut self, rows: Vec<TransactionRow>);

    /// Replace the balance panel
    fn render_balance(&mut self, panel: BalancePanel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_belong_to_their_form() {
        for form in [Form::CreateAccount, Form::Transaction, Form::BalanceCheck] {
            for field in form.fields() {
                assert_eq!(field.form(), form);
            }
        }
    }
}
