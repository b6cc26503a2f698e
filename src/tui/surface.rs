//! Terminal surface
//!
//! Holds the form inputs and the last rendered panels for the TUI. Focus
//! moves through every field of the three forms in order.

use crate::display::{AccountRow, BalancePanel, TransactionRow};
use crate::protocol::Movement;
use crate::view::{Field, Form, Surface};

use super::widgets::TextInput;

/// Focus order for Tab navigation
pub const FOCUS_ORDER: [Field; 6] = [
    Field::CustomerName,
    Field::InitialBalance,
    Field::TransactionAccount,
    Field::TransactionType,
    Field::Amount,
    Field::BalanceAccount,
];

/// State behind the terminal panels
#[derive(Debug, Clone)]
pub struct TuiSurface {
    focus: Field,
    customer_name: TextInput,
    initial_balance: TextInput,
    transaction_account: TextInput,
    movement: Movement,
    amount: TextInput,
    balance_account: TextInput,
    accounts: Vec<AccountRow>,
    transactions: Vec<TransactionRow>,
    balance: BalancePanel,
}

impl Default for TuiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiSurface {
    pub fn new() -> Self {
        Self {
            focus: Field::CustomerName,
            customer_name: TextInput::new().placeholder("Customer name"),
            initial_balance: TextInput::new().placeholder("0.00"),
            transaction_account: TextInput::new().placeholder("Account number"),
            movement: Movement::default(),
            amount: TextInput::new().placeholder("0.00"),
            balance_account: TextInput::new().placeholder("Account number"),
            accounts: Vec::new(),
            transactions: Vec::new(),
            balance: BalancePanel::Blank,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        let at = self.focus_index();
        self.focus = FOCUS_ORDER[(at + 1) % FOCUS_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let at = self.focus_index();
        self.focus = FOCUS_ORDER[(at + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0)
    }

    /// The text input behind a field; the transaction type is a selector
    pub fn input(&self, field: Field) -> Option<&TextInput> {
        match field {
            Field::CustomerName => Some(&self.customer_name),
            Field::InitialBalance => Some(&self.initial_balance),
            Field::TransactionAccount => Some(&self.transaction_account),
            Field::TransactionType => None,
            Field::Amount => Some(&self.amount),
            Field::BalanceAccount => Some(&self.balance_account),
        }
    }

    pub fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::CustomerName => Some(&mut self.customer_name),
            Field::InitialBalance => Some(&mut self.initial_balance),
            Field::TransactionAccount => Some(&mut self.transaction_account),
            Field::TransactionType => None,
            Field::Amount => Some(&mut self.amount),
            Field::BalanceAccount => Some(&mut self.balance_account),
        }
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn toggle_movement(&mut self) {
        self.movement = self.movement.toggled();
    }

    pub fn accounts(&self) -> &[AccountRow] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[TransactionRow] {
        &self.transactions
    }

    pub fn balance(&self) -> &BalancePanel {
        &self.balance
    }
}

impl Surface for TuiSurface {
    fn read(&self, field: Field) -> String {
        match self.input(field) {
            Some(input) => input.value().to_string(),
            None => self.movement.action().to_string(),
        }
    }

    fn reset(&mut self, form: Form) {
        for field in form.fields() {
            match self.input_mut(*field) {
                Some(input) => input.clear(),
                None => self.movement = Movement::default(),
            }
        }
    }

    fn render_accounts(&mut self, rows: Vec<AccountRow>) {
        self.accounts = rows;
    }

    fn render_transactions(&mut self, rows: Vec<TransactionRow>) {
        self.transactions = rows;
    }

    fn render_balance(&mut self, panel: BalancePanel) {
        self.balance = panel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut surface = TuiSurface::new();
        surface.focus_prev();
        assert_eq!(surface.focus(), Field::BalanceAccount);
        surface.focus_next();
        assert_eq!(surface.focus(), Field::CustomerName);

        for _ in 0..FOCUS_ORDER.len() {
            surface.focus_next();
        }
        assert_eq!(surface.focus(), Field::CustomerName);
    }

    #[test]
    fn test_read_transaction_type() {
        let mut surface = TuiSurface::new();
        assert_eq!(surface.read(Field::TransactionType), "deposit");
        surface.toggle_movement();
        assert_eq!(surface.read(Field::TransactionType), "withdraw");
    }

    #[test]
    fn test_reset_only_touches_its_form() {
        let mut surface = TuiSurface::new();
        if let Some(input) = surface.input_mut(Field::CustomerName) {
            input.set("Asha");
        }
        if let Some(input) = surface.input_mut(Field::Amount) {
            input.set("600");
        }
        surface.toggle_movement();

        surface.reset(Form::Transaction);
        assert_eq!(surface.read(Field::Amount), "");
        assert_eq!(surface.movement(), Movement::Deposit);
        assert_eq!(surface.read(Field::CustomerName), "Asha");
    }
}
