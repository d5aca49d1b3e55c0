//! HTTP client utilities.
//!
//! Provides the shared client and the single send path for every adapter.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::Value;

use crate::core::request::RequestSpec;
use crate::error::{FetchError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("taskfetch/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Classify a reqwest error, reporting timeouts against `timeout`.
fn transport_error(err: &reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout.as_secs())
    } else if err.is_decode() {
        FetchError::ParseResponse(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Send `spec` and decode the body as JSON.
///
/// The HTTP status is not checked. An error status with a JSON body comes back
/// as `Ok`; only transport failures and undecodable bodies are errors.
///
/// # Errors
///
/// Returns [`FetchError::Timeout`], [`FetchError::Network`], or
/// [`FetchError::ParseResponse`].
pub async fn send(client: &Client, spec: &RequestSpec, timeout: Duration) -> Result<Value> {
    let mut request = client.get(spec.full_url());
    for (name, value) in &spec.headers {
        request = request.header(name, value);
    }

    // The query may hold secrets; log the bare path only.
    tracing::debug!(url = %spec.url, headers = spec.headers.len(), "Sending request");

    let response = request
        .send()
        .await
        .map_err(|e| transport_error(&e, timeout))?;

    let status = response.status();
    if status.is_success() {
        tracing::debug!(%status, "Response received");
    } else {
        tracing::warn!(%status, url = %spec.url, "Non-success status, returning body as-is");
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| transport_error(&e, timeout))
}
