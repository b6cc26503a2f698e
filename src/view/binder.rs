//! View binder
//!
//! The bound view context: created once with its surface, client, notifier
//! and formatter, then driven by user actions. Each action reads input from
//! the surface, runs one ledger operation, and renders the result or reports
//! the failure.
//!
//! All state lives behind `RefCell`/`Cell` and borrows are never held across
//! an `.await`, so several actions may be in flight on the same thread.

use std::cell::{Ref, RefCell, RefMut};

use crate::client::input::{self, MovementInput, NewAccount};
use crate::client::{LedgerClient, Reply};
use crate::display::{account_rows, transaction_rows, BalancePanel, Formatter};
use crate::error::TellerError;
use crate::models::{AccountNumber, Money};
use crate::status::Notifier;

use super::sequence::{Panel, PanelSequencer};
use super::surface::{Field, Form, Surface};

pub const CREATE_FAILED: &str = "Failed to create account. Please try again.";
pub const TRANSACTION_FAILED: &str =
    "Transaction failed. Please check the account number and try again.";

/// User actions the binder responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateAccount,
    Transact,
    CheckBalance,
    RefreshAccounts,
    RefreshTransactions,
}

impl Action {
    /// The action a form submits
    pub fn submit(form: Form) -> Self {
        match form {
            Form::CreateAccount => Self::CreateAccount,
            Form::Transaction => Self::Transact,
            Form::BalanceCheck => Self::CheckBalance,
        }
    }
}

/// How an action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The endpoint accepted and the result was rendered
    Completed,
    /// Input was invalid; nothing was sent
    Invalid,
    /// The endpoint answered with a non-success status
    Rejected,
    /// The round trip failed
    Failed,
    /// A newer request for the same panel made this response obsolete
    Stale,
}

/// Binds a presentation surface to the ledger client
pub struct ViewBinder<S: Surface> {
    client: LedgerClient,
    notifier: Notifier,
    formatter: Formatter,
    surface: RefCell<S>,
    sequence: PanelSequencer,
    balance_panel: RefCell<BalancePanel>,
}

impl<S: Surface> ViewBinder<S> {
    pub fn new(
        client: LedgerClient,
        notifier: Notifier,
        formatter: Formatter,
        surface: S,
    ) -> Self {
        Self {
            client,
            notifier,
            formatter,
            surface: RefCell::new(surface),
            sequence: PanelSequencer::new(),
            balance_panel: RefCell::new(BalancePanel::Blank),
        }
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn surface_mut(&self) -> RefMut<'_, S> {
        self.surface.borrow_mut()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Initial load: both tables, unconditionally
    pub async fn start(&self) {
        tokio::join!(self.refresh_accounts(), self.refresh_transactions());
    }

    /// Run the handler bound to an action
    pub async fn dispatch(&self, action: Action) -> Outcome {
        tracing::debug!(?action, "Dispatching");
        match action {
            Action::CreateAccount => self.create_account().await,
            Action::Transact => self.transact().await,
            Action::CheckBalance => self.check_balance().await,
            Action::RefreshAccounts => self.refresh_accounts().await,
            Action::RefreshTransactions => self.refresh_transactions().await,
        }
    }

    /// Submit the create-account form
    pub async fn create_account(&self) -> Outcome {
        let parsed = {
            let surface = self.surface.borrow();
            NewAccount::parse(
                &surface.read(Field::CustomerName),
                &surface.read(Field::InitialBalance),
            )
        };
        let new_account = match parsed {
            Ok(new_account) => new_account,
            Err(err) => return self.settle_error(err),
        };

        match self.client.create_account(&new_account).await {
            Ok(Reply::Accepted(number)) => {
                tracing::info!(account_number = %number, "Account created");
                self.notifier
                    .success(format!("Account created successfully! Account #{}", number));
                self.surface.borrow_mut().reset(Form::CreateAccount);
                self.refresh_accounts().await;
                Outcome::Completed
            }
            Ok(Reply::Rejected) => {
                self.notifier.danger(CREATE_FAILED);
                Outcome::Rejected
            }
            Err(err) => self.settle_error(err),
        }
    }

    /// Submit the deposit/withdraw form
    pub async fn transact(&self) -> Outcome {
        let parsed = {
            let surface = self.surface.borrow();
            MovementInput::parse(
                &surface.read(Field::TransactionType),
                &surface.read(Field::TransactionAccount),
                &surface.read(Field::Amount),
            )
        };
        let movement = match parsed {
            Ok(movement) => movement,
            Err(err) => return self.settle_error(err),
        };

        let balance_seen = self.sequence.latest(Panel::Balance);
        match self.client.transact(&movement).await {
            Ok(Reply::Accepted(new_balance)) => {
                tracing::info!(
                    action = movement.movement.action(),
                    account_number = %movement.account_number,
                    "Transaction accepted"
                );
                self.notifier.success(format!(
                    "Successfully {} account #{}. New balance: {}",
                    movement.movement.past_tense(),
                    movement.account_number,
                    self.formatter.currency(new_balance)
                ));
                self.surface.borrow_mut().reset(Form::Transaction);

                // A balance check sent after this transaction wins the panel.
                if self.balance_shown() == Some(movement.account_number)
                    && self.sequence.is_current(balance_seen)
                {
                    self.sequence.begin(Panel::Balance);
                    self.show_balance(movement.account_number, new_balance);
                }

                tokio::join!(self.refresh_accounts(), self.refresh_transactions());
                Outcome::Completed
            }
            Ok(Reply::Rejected) => {
                self.notifier.danger(TRANSACTION_FAILED);
                Outcome::Rejected
            }
            Err(err) => self.settle_error(err),
        }
    }

    /// Submit the balance-check form
    pub async fn check_balance(&self) -> Outcome {
        let parsed = input::account_number(&self.surface.borrow().read(Field::BalanceAccount));
        let account_number = match parsed {
            Ok(number) => number,
            Err(err) => return self.settle_error(err),
        };

        let ticket = self.sequence.begin(Panel::Balance);
        let reply = self.client.balance(account_number).await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!(account_number = %account_number, "Discarding stale balance");
            return Outcome::Stale;
        }

        match reply {
            Ok(Reply::Accepted(balance)) => {
                self.show_balance(account_number, balance);
                Outcome::Completed
            }
            Ok(Reply::Rejected) => {
                self.set_balance_panel(BalancePanel::NotFound);
                Outcome::Rejected
            }
            Err(err) => self.settle_error(err),
        }
    }

    /// Reload the accounts table
    ///
    /// A rejection leaves the previous table in place without telling the user.
    pub async fn refresh_accounts(&self) -> Outcome {
        let ticket = self.sequence.begin(Panel::Accounts);
        let reply = self.client.accounts().await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!("Discarding stale account list");
            return Outcome::Stale;
        }

        match reply {
            Ok(Reply::Accepted(accounts)) => {
                let rows = account_rows(accounts, &self.formatter);
                self.surface.borrow_mut().render_accounts(rows);
                Outcome::Completed
            }
            Ok(Reply::Rejected) => Outcome::Rejected,
            Err(err) => self.settle_error(err),
        }
    }

    /// Reload the transactions table
    ///
    /// A rejection leaves the previous table in place without telling the user.
    pub async fn refresh_transactions(&self) -> Outcome {
        let ticket = self.sequence.begin(Panel::Transactions);
        let reply = self.client.transactions().await;
        if !self.sequence.is_current(ticket) {
            tracing::debug!("Discarding stale transaction list");
            return Outcome::Stale;
        }

        match reply {
            Ok(Reply::Accepted(transactions)) => {
                let rows = transaction_rows(transactions, &self.formatter);
                self.surface.borrow_mut().render_transactions(rows);
                Outcome::Completed
            }
            Ok(Reply::Rejected) => Outcome::Rejected,
            Err(err) => self.settle_error(err),
        }
    }

    /// The account the balance panel currently shows
    pub fn balance_shown(&self) -> Option<AccountNumber> {
        self.balance_panel.borrow().account_number()
    }

    fn show_balance(&self, account_number: AccountNumber, balance: Money) {
        self.set_balance_panel(BalancePanel::balance(account_number, balance, &self.formatter));
    }

    fn set_balance_panel(&self, panel: BalancePanel) {
        *self.balance_panel.borrow_mut() = panel.clone();
        self.surface.borrow_mut().render_balance(panel);
    }

    /// Validation errors become warnings; transport failures were already reported
    fn settle_error(&self, err: TellerError) -> Outcome {
        match err {
            TellerError::Validation(message) => {
                self.notifier.warning(message);
                Outcome::Invalid
            }
            other => {
                tracing::debug!(error = %other, "Action abandoned");
                Outcome::Failed
            }
        }
    }
}

impl Outcome {
    /// Whether the action ended in a state the user should treat as failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Invalid | Self::Rejected | Self::Failed)
    }
}
