//! Transaction CLI commands
//!
//! Listing plus the deposit and withdraw shortcuts.

use clap::Subcommand;

use crate::display::format_transaction_table;
use crate::protocol::Movement;
use crate::view::{Action, Field, Outcome, ViewBinder};

use super::console::ConsoleSurface;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List all transactions, newest first
    List,
}

/// Handle a transaction command
pub async fn handle_transaction_command(
    binder: &ViewBinder<ConsoleSurface>,
    cmd: TransactionCommands,
) -> Outcome {
    match cmd {
        TransactionCommands::List => {
            let outcome = binder.dispatch(Action::RefreshTransactions).await;
            if let Some(rows) = binder.surface().transactions() {
                println!("{}", format_transaction_table(rows));
            }
            outcome
        }
    }
}

/// Deposit to or withdraw from an account
pub async fn handle_movement(
    binder: &ViewBinder<ConsoleSurface>,
    movement: Movement,
    account: String,
    amount: String,
) -> Outcome {
    {
        let mut surface = binder.surface_mut();
        surface.fill(Field::TransactionType, movement.action());
        surface.fill(Field::TransactionAccount, account);
        surface.fill(Field::Amount, amount);
    }
    binder.dispatch(Action::Transact).await
}
