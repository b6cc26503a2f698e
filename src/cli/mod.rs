//! CLI command handlers
//!
//! One-shot commands drive the same view binder as the TUI. Arguments are
//! written into a [`ConsoleSurface`] as if typed into the forms, the bound
//! action runs, and the resulting panel and notification are printed.

pub mod account;
pub mod console;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use console::ConsoleSurface;
pub use transaction::{handle_movement, handle_transaction_command, TransactionCommands};

use crate::status::Notifier;

/// Print the notification left in the slot
///
/// Problems go to stderr. Returns true if a problem was reported.
pub fn report(notifier: &Notifier) -> bool {
    let Some(notification) = notifier.current() else {
        return false;
    };

    let line = format!("{}: {}", notification.severity.title(), notification.message);
    if notification.severity.is_problem() {
        eprintln!("{}", line);
        true
    } else {
        println!("{}", line);
        false
    }
}
