//! HTTP client for the public-events endpoint.

use crate::event::{FeedError, PushEvent, parse_feed};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("histloom/", env!("CARGO_PKG_VERSION"));

/// Blocking client around one subject's public-events endpoint.
#[derive(Debug)]
pub struct FeedClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the endpoint base, e.g. for a local fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch and parse the subject's public push events, oldest first.
    pub fn fetch(&self, user: &str) -> Result<Vec<PushEvent>, FeedError> {
        let url = format!("{}/users/{user}/events/public", self.base_url);
        tracing::debug!(%url, "fetching event feed");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FeedError::Request(e.to_string()))?;
        parse_feed(&body)
    }
}
