//! Source dispatch.
//!
//! Maps a source name to its adapter and runs the single request/response
//! round trip. One enum variant per provider, each carrying its own typed
//! configuration.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;

use crate::core::credentials::Credentials;
use crate::core::http::{build_client, send};
use crate::core::request::RequestSpec;
use crate::core::source::Source;
use crate::error::Result;
use crate::providers::{ClickUpAdapter, JiraAdapter, TrelloAdapter};
use crate::storage::config::{BaseUrls, ResolvedConfig};

/// A configured provider adapter.
#[derive(Clone)]
pub enum Adapter {
    Jira(JiraAdapter),
    Trello(TrelloAdapter),
    ClickUp(ClickUpAdapter),
}

impl Adapter {
    /// Build the adapter for `source` from resolved base URLs and captured credentials.
    #[must_use]
    pub fn for_source(source: Source, base_urls: &BaseUrls, credentials: &Credentials) -> Self {
        let base_url = base_urls.for_source(source).clone();
        match source {
            Source::Jira => Self::Jira(JiraAdapter::new(base_url, credentials.jira_token.clone())),
            Source::Trello => Self::Trello(TrelloAdapter::new(
                base_url,
                credentials.trello_key.clone(),
                credentials.trello_token.clone(),
            )),
            Source::ClickUp => Self::ClickUp(ClickUpAdapter::new(
                base_url,
                credentials.clickup_token.clone(),
            )),
        }
    }

    /// Which source this adapter talks to.
    #[must_use]
    pub const fn source(&self) -> Source {
        match self {
            Self::Jira(_) => Source::Jira,
            Self::Trello(_) => Source::Trello,
            Self::ClickUp(_) => Source::ClickUp,
        }
    }

    /// Build the request for `identifier` without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the adapter's base URL cannot carry a path.
    pub fn request(&self, identifier: &str) -> Result<RequestSpec> {
        match self {
            Self::Jira(adapter) => adapter.request(identifier),
            Self::Trello(adapter) => adapter.request(identifier),
            Self::ClickUp(adapter) => adapter.request(identifier),
        }
    }
}

/// Runs an adapter's request over HTTP.
pub struct Fetcher {
    adapter: Adapter,
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher with a fresh client using `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(adapter: Adapter, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(adapter, build_client(timeout)?, timeout))
    }

    /// Create a fetcher around an existing client.
    #[must_use]
    pub const fn with_client(adapter: Adapter, client: Client, timeout: Duration) -> Self {
        Self {
            adapter,
            client,
            timeout,
        }
    }

    /// Fetch the raw payload for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns network, timeout, or parse errors. HTTP error statuses are not errors.
    pub async fn fetch(&self, identifier: &str) -> Result<Value> {
        let source = self.adapter.source();
        let spec = self.adapter.request(identifier)?;

        tracing::info!(source = %source, identifier, "Fetching");
        let start = Instant::now();

        let result = send(&self.client, &spec, self.timeout).await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => tracing::info!(source = %source, duration_ms, "Fetch succeeded"),
            Err(e) => tracing::warn!(source = %source, duration_ms, error = %e, "Fetch failed"),
        }

        result
    }
}

/// Parse `source_name`, build its adapter, and fetch `identifier`.
///
/// The source name is checked before any client is built, so an unknown
/// source never reaches the network.
///
/// # Errors
///
/// Returns [`FetchError::InvalidSource`](crate::error::FetchError::InvalidSource)
/// for unknown sources, otherwise whatever [`Fetcher::fetch`] returns.
pub async fn dispatch(
    source_name: &str,
    identifier: &str,
    config: &ResolvedConfig,
    credentials: &Credentials,
) -> Result<Value> {
    let source = Source::from_cli_name(source_name)?;
    let adapter = Adapter::for_source(source, &config.base_urls, credentials);
    Fetcher::new(adapter, config.timeout)?.fetch(identifier).await
}
