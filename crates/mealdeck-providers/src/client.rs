use crate::endpoint::parse_base_url;
use crate::{Endpoint, Result};
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// Thin JSON-over-HTTP client bound to one base URL.
///
/// One call issues exactly one GET; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base: Url,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET the endpoint and parse the body as JSON
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value> {
        let url = endpoint.url(&self.base)?;
        tracing::debug!(%url, "requesting");

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        tracing::debug!(%url, bytes = body.len(), "response received");

        Ok(serde_json::from_slice(&body)?)
    }
}
