//! Transport to the ledger endpoint
//!
//! [`Transport::send`] performs exactly one round trip per call. The actual
//! I/O sits behind the [`Endpoint`] trait; [`HttpEndpoint`] is the production
//! implementation.
//!
//! On any failure the user is told once, generically, through the status
//! notifier; the cause only goes to the log. The error is then returned so
//! the caller can abandon the action.

pub mod http;

use async_trait::async_trait;

use crate::error::{TellerError, TellerResult};
use crate::protocol::{Request, Response};
use crate::status::Notifier;

pub use http::HttpEndpoint;

/// Message shown for every transport failure
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Something that can answer ledger requests
///
/// Implementations report network failures, non-2xx statuses, and
/// unparseable bodies as errors. A parsed response with a non-success status
/// is *not* an error at this level.
#[async_trait(?Send)]
pub trait Endpoint {
    async fn post(&self, request: &Request) -> TellerResult<Response>;
}

/// Single-attempt request sender that reports failures to the user
pub struct Transport {
    endpoint: Box<dyn Endpoint>,
    notifier: Notifier,
}

impl Transport {
    pub fn new(endpoint: Box<dyn Endpoint>, notifier: Notifier) -> Self {
        Self { endpoint, notifier }
    }

    /// Send a request and return the parsed response, whatever its status
    pub async fn send(&self, request: &Request) -> TellerResult<Response> {
        let action = request.action();
        tracing::debug!(action, "Sending request");

        match self.endpoint.post(request).await {
            Ok(response) => {
                tracing::debug!(action, status = %response.status, "Received response");
                Ok(response)
            }
            Err(err) => {
                tracing::error!(action, error = %err, "Request failed");
                self.notifier.danger(FAILURE_MESSAGE);
                Err(match err {
                    TellerError::Transport(_) => err,
                    other => TellerError::Transport(other.to_string()),
                })
            }
        }
    }
}
