// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use teller::client::LedgerClient;
use teller::display::{AccountRow, BalancePanel, Formatter, TransactionRow};
use teller::error::{TellerError, TellerResult};
use teller::protocol::{Request, Response};
use teller::status::Notifier;
use teller::transport::{Endpoint, Transport};
use teller::view::{Field, Form, Surface, ViewBinder};

type Reply = (Duration, TellerResult<Response>);

#[derive(Default)]
struct Script {
    replies: RefCell<HashMap<&'static str, VecDeque<Reply>>>,
    requests: RefCell<Vec<Request>>,
}

/// Endpoint answering from per-action queues of canned replies
///
/// Clones share the script, so a test keeps one handle while the client owns
/// another. An action with nothing queued fails like a dropped connection.
#[derive(Clone, Default)]
pub struct ScriptedEndpoint {
    script: Rc<Script>,
}

impl ScriptedEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, action: &'static str, response: Response) -> &Self {
        self.reply_after(action, Duration::ZERO, response)
    }

    pub fn reply_after(&self, action: &'static str, delay: Duration, response: Response) -> &Self {
        self.push(action, delay, Ok(response))
    }

    /// Queue a round-trip failure
    pub fn fail(&self, action: &'static str) -> &Self {
        self.push(
            action,
            Duration::ZERO,
            Err(TellerError::Transport("connection refused".into())),
        )
    }

    fn push(&self, action: &'static str, delay: Duration, reply: TellerResult<Response>) -> &Self {
        self.script
            .replies
            .borrow_mut()
            .entry(action)
            .or_default()
            .push_back((delay, reply));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.script.requests.borrow().clone()
    }

    /// How many requests were sent for an action
    pub fn sent(&self, action: &str) -> usize {
        self.script
            .requests
            .borrow()
            .iter()
            .filter(|r| r.action() == action)
            .count()
    }
}

#[async_trait(?Send)]
impl Endpoint for ScriptedEndpoint {
    async fn post(&self, request: &Request) -> TellerResult<Response> {
        self.script.requests.borrow_mut().push(request.clone());

        let next = self
            .script
            .replies
            .borrow_mut()
            .get_mut(request.action())
            .and_then(|queue| queue.pop_front());

        match next {
            Some((delay, reply)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                reply
            }
            None => Err(TellerError::Transport(format!(
                "no reply scripted for {}",
                request.action()
            ))),
        }
    }
}

/// Surface that records every panel write
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inputs: HashMap<Field, String>,
    pub accounts: Option<Vec<AccountRow>>,
    pub transactions: Option<Vec<TransactionRow>>,
    pub balance: Option<BalancePanel>,
    pub account_renders: usize,
    pub transaction_renders: usize,
    pub resets: Vec<Form>,
}

impl RecordingSurface {
    pub fn fill(&mut self, field: Field, value: &str) {
        self.inputs.insert(field, value.to_string());
    }
}

impl Surface for RecordingSurface {
    fn read(&self, field: Field) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    fn reset(&mut self, form: Form) {
        for field in form.fields() {
            self.inputs.remove(field);
        }
        self.resets.push(form);
    }

    fn render_accounts(&mut self, rows: Vec<AccountRow>) {
        self.accounts = Some(rows);
        self.account_renders += 1;
    }

    fn render_transactions(&mut self, rows: Vec<TransactionRow>) {
        self.transactions = Some(rows);
        self.transaction_renders += 1;
    }

    fn render_balance(&mut self, panel: BalancePanel) {
        self.balance = Some(panel);
    }
}

/// Client over a scripted endpoint, sharing the given notifier
pub fn scripted_client(endpoint: &ScriptedEndpoint, notifier: &Notifier) -> LedgerClient {
    LedgerClient::new(Transport::new(Box::new(endpoint.clone()), notifier.clone()))
}

/// A binder over a recording surface and a scripted endpoint
pub fn test_binder(endpoint: &ScriptedEndpoint) -> ViewBinder<RecordingSurface> {
    let notifier = Notifier::default();
    let client = scripted_client(endpoint, &notifier);
    ViewBinder::new(client, notifier, Formatter::default(), RecordingSurface::default())
}
