//! Ledger client
//!
//! One method per ledger operation. Each builds the request, performs a
//! single round trip through the [`Transport`], and interprets the response
//! status. Nothing is cached between calls.

pub mod input;

use crate::error::TellerResult;
use crate::models::{Account, AccountNumber, Money, Transaction};
use crate::protocol::{Movement, Request, Response};
use crate::transport::Transport;

pub use input::{MovementInput, NewAccount};

/// Outcome of a completed round trip
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// The endpoint reported success
    Accepted(T),
    /// The endpoint answered with a non-success status
    Rejected,
}

impl<T> Reply<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Use-case operations against the ledger endpoint
pub struct LedgerClient {
    transport: Transport,
}

impl LedgerClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Open an account; yields the server-assigned number
    pub async fn create_account(&self, input: &NewAccount) -> TellerResult<Reply<AccountNumber>> {
        let request = Request::CreateAccount {
            name: input.name.clone(),
            initial_balance: input.initial_balance,
        };
        let response = self.transport.send(&request).await?;
        Ok(accept(&request, response, |r| r.account_number))
    }

    /// Deposit into or withdraw from an account; yields the new balance
    ///
    /// A non-positive amount is rejected without contacting the endpoint.
    pub async fn transact(&self, input: &MovementInput) -> TellerResult<Reply<Money>> {
        input::ensure_positive(input.amount)?;

        let request = Request::movement(input.movement, input.account_number, input.amount);
        let response = self.transport.send(&request).await?;
        Ok(accept(&request, response, |r| r.new_balance))
    }

    pub async fn deposit(
        &self,
        account_number: AccountNumber,
        amount: Money,
    ) -> TellerResult<Reply<Money>> {
        self.transact(&MovementInput {
            movement: Movement::Deposit,
            account_number,
            amount,
        })
        .await
    }

    pub async fn withdraw(
        &self,
        account_number: AccountNumber,
        amount: Money,
    ) -> TellerResult<Reply<Money>> {
        self.transact(&MovementInput {
            movement: Movement::Withdraw,
            account_number,
            amount,
        })
        .await
    }

    /// Current balance of one account
    pub async fn balance(&self, account_number: AccountNumber) -> TellerResult<Reply<Money>> {
        let request = Request::GetBalance { account_number };
        let response = self.transport.send(&request).await?;
        Ok(accept(&request, response, |r| r.balance))
    }

    /// All accounts, in server order
    pub async fn accounts(&self) -> TellerResult<Reply<Vec<Account>>> {
        let request = Request::GetAccounts;
        let response = self.transport.send(&request).await?;
        Ok(accept(&request, response, |r| Some(r.accounts.unwrap_or_default())))
    }

    /// Transaction history, in server order
    pub async fn transactions(&self) -> TellerResult<Reply<Vec<Transaction>>> {
        let request = Request::GetTransactions;
        let response = self.transport.send(&request).await?;
        Ok(accept(&request, response, |r| Some(r.transactions.unwrap_or_default())))
    }
}

/// Map a response to a reply, extracting the action's result field
///
/// A success status without the expected field counts as a rejection.
fn accept<T>(
    request: &Request,
    response: Response,
    extract: impl FnOnce(Response) -> Option<T>,
) -> Reply<T> {
    let action = request.action();

    if !response.is_success() {
        tracing::warn!(
            action,
            status = %response.status,
            message = response.message.as_deref().unwrap_or(""),
            "Endpoint rejected request"
        );
        return Reply::Rejected;
    }

    match extract(response) {
        Some(value) => Reply::Accepted(value),
        None => {
            tracing::warn!(action, "Success response is missing its result field");
            Reply::Rejected
        }
    }
}
