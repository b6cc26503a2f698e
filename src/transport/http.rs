//! HTTP endpoint backed by reqwest

use async_trait::async_trait;
use reqwest::Client;

use super::Endpoint;
use crate::error::{TellerError, TellerResult};
use crate::protocol::{Request, Response};

/// POSTs JSON requests to a single URL
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: Client,
    url: String,
}

impl HttpEndpoint {
    /// Create an endpoint for `url`
    ///
    /// No timeout is configured; the HTTP client's defaults apply.
    pub fn new(url: impl Into<String>) -> TellerResult<Self> {
        let url = url.into();
        reqwest::Url::parse(&url)
            .map_err(|e| TellerError::Config(format!("Invalid endpoint URL '{}': {}", url, e)))?;

        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl Endpoint for HttpEndpoint {
    async fn post(&self, request: &Request) -> TellerResult<Response> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TellerError::Transport(format!("HTTP error! status: {}", status)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| TellerError::Transport(format!("Malformed response body: {}", e)))
    }
}
