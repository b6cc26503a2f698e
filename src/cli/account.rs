//! Account CLI commands

use clap::Subcommand;

use crate::display::format_account_table;
use crate::view::{Action, Field, Outcome, ViewBinder};

use super::console::ConsoleSurface;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Create {
        /// Customer name
        name: String,
        /// Initial balance (e.g., "500" or "500.00")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show the balance of one account
    Balance {
        /// Account number
        #[arg(allow_hyphen_values = true)]
        account: String,
    },
}

/// Handle an account command
pub async fn handle_account_command(
    binder: &ViewBinder<ConsoleSurface>,
    cmd: AccountCommands,
) -> Outcome {
    match cmd {
        AccountCommands::Create { name, balance } => {
            {
                let mut surface = binder.surface_mut();
                surface.fill(Field::CustomerName, name);
                surface.fill(Field::InitialBalance, balance);
            }
            binder.dispatch(Action::CreateAccount).await
        }
        AccountCommands::List => {
            let outcome = binder.dispatch(Action::RefreshAccounts).await;
            if let Some(rows) = binder.surface().accounts() {
                println!("{}", format_account_table(rows));
            }
            outcome
        }
        AccountCommands::Balance { account } => {
            binder.surface_mut().fill(Field::BalanceAccount, account);
            let outcome = binder.dispatch(Action::CheckBalance).await;
            if let Some(panel) = binder.surface().balance() {
                println!("{}", panel);
            }
            outcome
        }
    }
}
