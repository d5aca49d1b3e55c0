//! Trello provider.
//!
//! Lists the cards on a board. The API key and token travel as query
//! parameters.

use reqwest::Url;

use crate::core::credentials::{ENV_TRELLO_KEY, ENV_TRELLO_TOKEN};
use crate::core::request::{RequestSpec, join_segments};
use crate::error::Result;

/// Trello REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

/// Trello adapter configuration.
#[derive(Clone)]
pub struct TrelloAdapter {
    base_url: Url,
    key: Option<String>,
    token: Option<String>,
}

impl TrelloAdapter {
    #[must_use]
    pub const fn new(base_url: Url, key: Option<String>, token: Option<String>) -> Self {
        Self {
            base_url,
            key,
            token,
        }
    }

    /// Build the card listing request for `board_id`.
    ///
    /// The id is percent-encoded as one path segment, so `a/b` stays inside
    /// the boards route instead of addressing another endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured base URL cannot carry a path.
    pub fn request(&self, board_id: &str) -> Result<RequestSpec> {
        let url = join_segments(&self.base_url, &["1", "boards", board_id, "cards"])?;
        let mut spec = RequestSpec::get(url);

        for (name, param, value) in [
            (ENV_TRELLO_KEY, "key", &self.key),
            (ENV_TRELLO_TOKEN, "token", &self.token),
        ] {
            match value {
                Some(value) => spec = spec.query(param, value.as_str()),
                None => tracing::warn!(var = name, "Trello {param} not set, omitting it"),
            }
        }

        Ok(spec)
    }
}
