//! Test utilities for taskfetch.
//!
//! Provides shared factories for credentials, resolved configs pointed at a
//! mock server, and realistic per-source payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use taskfetch::test_utils::*;
//!
//! let config = make_test_config(&mock_server.uri());
//! let creds = make_test_credentials();
//! let body = make_test_payload(Source::Jira);
//! ```

use std::time::Duration;

use reqwest::Url;
use serde_json::{Value, json};

use crate::core::credentials::Credentials;
use crate::core::dispatch::Adapter;
use crate::core::source::Source;
use crate::storage::config::{BaseUrls, ConfigSources, ResolvedConfig};

/// Credentials matching the documented example values.
#[must_use]
pub fn make_test_credentials() -> Credentials {
    Credentials {
        jira_token: Some("tok123".to_string()),
        trello_key: Some("k".to_string()),
        trello_token: Some("t".to_string()),
        clickup_token: Some("ct".to_string()),
    }
}

/// Resolved config with every source pointed at `base`.
///
/// # Panics
///
/// Panics if `base` is not a valid URL.
#[must_use]
pub fn make_test_config(base: &str) -> ResolvedConfig {
    let url = Url::parse(base).expect("test base URL");
    ResolvedConfig {
        timeout: Duration::from_secs(5),
        pretty: false,
        base_urls: BaseUrls {
            jira: url.clone(),
            trello: url.clone(),
            clickup: url,
        },
        sources: ConfigSources::default(),
    }
}

/// Adapter for `source` against `base` with test credentials.
#[must_use]
pub fn make_test_adapter(source: Source, base: &str) -> Adapter {
    Adapter::for_source(
        source,
        &make_test_config(base).base_urls,
        &make_test_credentials(),
    )
}

/// A response body shaped like the real service's.
#[must_use]
pub fn make_test_payload(source: Source) -> Value {
    match source {
        Source::Jira => json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 2,
            "issues": [
                {"id": "10001", "key": "ABC-1", "fields": {"summary": "Set up CI", "status": {"name": "Done"}}},
                {"id": "10002", "key": "ABC-2", "fields": {"summary": "Write docs", "status": {"name": "To Do"}}}
            ]
        }),
        Source::Trello => json!([
            {"id": "5f1a", "name": "Design review", "idList": "60aa", "closed": false},
            {"id": "5f1b", "name": "Ship it", "idList": "60ab", "closed": true}
        ]),
        Source::ClickUp => json!({
            "tasks": [
                {"id": "9hz", "name": "Triage inbox", "status": {"status": "open"}, "priority": null}
            ],
            "last_page": true
        }),
    }
}
