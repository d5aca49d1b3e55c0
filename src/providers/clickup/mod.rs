//! ClickUp provider.
//!
//! Lists the tasks in a list. The personal token is sent raw in the
//! `Authorization` header, without a scheme prefix.

use reqwest::Url;

use crate::core::credentials::ENV_CLICKUP_TOKEN;
use crate::core::request::{RequestSpec, join_segments};
use crate::error::Result;

/// ClickUp API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com";

/// ClickUp adapter configuration.
#[derive(Clone)]
pub struct ClickUpAdapter {
    base_url: Url,
    token: Option<String>,
}

impl ClickUpAdapter {
    #[must_use]
    pub const fn new(base_url: Url, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    /// Build the task listing request for `list_id`.
    ///
    /// The id is percent-encoded as one path segment, so `a/b` stays inside
    /// the list route instead of addressing another endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured base URL cannot carry a path.
    pub fn request(&self, list_id: &str) -> Result<RequestSpec> {
        let url = join_segments(&self.base_url, &["api", "v2", "list", list_id, "task"])?;
        let spec = RequestSpec::get(url);

        let Some(token) = &self.token else {
            tracing::warn!(
                var = ENV_CLICKUP_TOKEN,
                "ClickUp token not set, sending request without Authorization"
            );
            return Ok(spec);
        };

        Ok(spec.header("Authorization", token.as_str()))
    }
}
