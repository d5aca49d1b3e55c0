//! Jira provider.
//!
//! Reads issues through the REST v3 search endpoint, filtered by project key
//! with a JQL predicate. Authenticates with a bearer token.

use reqwest::Url;

use crate::core::credentials::ENV_JIRA_TOKEN;
use crate::core::request::{RequestSpec, join_segments};
use crate::error::Result;

/// Placeholder site; real deployments override it in config.
pub const DEFAULT_BASE_URL: &str = "https://your-domain.atlassian.net";

/// Search endpoint path below the site root.
const SEARCH_PATH: &[&str] = &["rest", "api", "3", "search"];

/// Fixed page size. Only the first page is ever requested.
pub const MAX_RESULTS: u32 = 50;

/// Jira adapter configuration.
#[derive(Clone)]
pub struct JiraAdapter {
    base_url: Url,
    token: Option<String>,
}

impl JiraAdapter {
    #[must_use]
    pub const fn new(base_url: Url, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    /// Build the search request for `project_key`.
    ///
    /// The key is embedded in the JQL as-is. An unset token omits the
    /// `Authorization` header rather than sending a literal placeholder, and a
    /// missing project key arrives here as the empty string.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured base URL cannot carry a path.
    pub fn request(&self, project_key: &str) -> Result<RequestSpec> {
        let url = join_segments(&self.base_url, SEARCH_PATH)?;
        let mut spec = RequestSpec::get(url);

        match &self.token {
            Some(token) => spec = spec.header("Authorization", format!("Bearer {token}")),
            None => tracing::warn!(
                var = ENV_JIRA_TOKEN,
                "Jira token not set, sending request without Authorization"
            ),
        }

        Ok(spec
            .header("Accept", "application/json")
            .query("jql", format!("project={project_key}"))
            .query("maxResults", MAX_RESULTS.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn adapter(token: Option<&str>) -> JiraAdapter {
        JiraAdapter::new(
            Url::parse(DEFAULT_BASE_URL).unwrap(),
            token.map(str::to_string),
        )
    }

    #[test]
    fn builds_search_request() {
        let spec = adapter(Some("tok123")).request("ABC").unwrap();

        assert_eq!(
            spec.url.as_str(),
            "https://your-domain.atlassian.net/rest/api/3/search"
        );
        assert_eq!(spec.header_value("Authorization"), Some("Bearer tok123"));
        assert_eq!(spec.header_value("Accept"), Some("application/json"));
        assert_eq!(
            spec.query,
            vec![
                ("jql".to_string(), "project=ABC".to_string()),
                ("maxResults".to_string(), "50".to_string()),
            ]
        );
    }

    #[traced_test]
    #[test]
    fn missing_token_omits_authorization() {
        let spec = adapter(None).request("ABC").unwrap();
        assert_eq!(spec.header_value("Authorization"), None);
        assert_eq!(spec.query_value("jql"), Some("project=ABC"));
        assert!(logs_contain("JIRA_TOKEN"));
    }

    #[test]
    fn empty_token_is_sent_verbatim() {
        let spec = adapter(Some("")).request("ABC").unwrap();
        assert_eq!(spec.header_value("Authorization"), Some("Bearer "));
    }

    #[test]
    fn empty_project_passes_through() {
        let spec = adapter(Some("t")).request("").unwrap();
        assert_eq!(spec.query_value("jql"), Some("project="));
    }

    #[test]
    fn request_is_deterministic() {
        let a = adapter(Some("t"));
        assert_eq!(a.request("XYZ").unwrap(), a.request("XYZ").unwrap());
    }
}
