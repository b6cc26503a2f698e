//! Console surface
//!
//! Fields are filled from command-line arguments before an action runs.
//! Rendered panels are kept so the command can print the ones it asked for.

use std::collections::HashMap;

use crate::display::{AccountRow, BalancePanel, TransactionRow};
use crate::view::{Field, Form, Surface};

#[derive(Debug, Default)]
pub struct ConsoleSurface {
    inputs: HashMap<Field, String>,
    accounts: Option<Vec<AccountRow>>,
    transactions: Option<Vec<TransactionRow>>,
    balance: Option<BalancePanel>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ConsoleSurface::fill`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fill(field, value);
        self
    }

    pub fn fill(&mut self, field: Field, value: impl Into<String>) {
        self.inputs.insert(field, value.into());
    }

    /// Last accounts table rendered, if any
    pub fn accounts(&self) -> Option<&[AccountRow]> {
        self.accounts.as_deref()
    }

    pub fn transactions(&self) -> Option<&[TransactionRow]> {
        self.transactions.as_deref()
    }

    pub fn balance(&self) -> Option<&BalancePanel> {
        self.balance.as_ref()
    }
}

impl Surface for ConsoleSurface {
    fn read(&self, field: Field) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    fn reset(&mut self, form: Form) {
        for field in form.fields() {
            self.inputs.remove(field);
        }
    }

    fn render_accounts(&mut self, rows: Vec<AccountRow>) {
        self.accounts = Some(rows);
    }

    fn render_transactions(&mut self, rows: Vec<TransactionRow>) {
        self.transactions = Some(rows);
    }

    fn render_balance(&mut self, panel: BalancePanel) {
        self.balance = Some(panel);
    }
}
