//! Request descriptor shared by all adapters.
//!
//! Adapters only describe the request. Sending it is the job of
//! [`crate::core::http::send`], which keeps request construction free of I/O and
//! lets tests inspect exactly what would go over the wire.

use reqwest::Url;

use crate::error::{FetchError, Result};

/// A single GET request: target URL, headers and query parameters.
///
/// `url` never carries the query string; the pairs in `query` are appended by
/// [`RequestSpec::full_url`] when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    /// Start a GET request against `url`.
    #[must_use]
    pub const fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Header value by name (case-insensitive).
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query parameter value by name.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// URL with the query parameters encoded in.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

/// Append path segments to a base URL, percent-encoding each one.
///
/// A trailing slash on the base is absorbed so `https://host/` and `https://host`
/// produce the same result.
///
/// # Errors
///
/// Returns [`FetchError::Config`] if `base` cannot carry a path (e.g. `mailto:`).
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| FetchError::Config(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn join_segments_handles_trailing_slash() {
        let with = join_segments(&base("https://api.trello.com/"), &["1", "boards"]).unwrap();
        let without = join_segments(&base("https://api.trello.com"), &["1", "boards"]).unwrap();
        assert_eq!(with, without);
        assert_eq!(with.as_str(), "https://api.trello.com/1/boards");
    }

    #[test]
    fn join_segments_keeps_base_path_prefix() {
        let url = join_segments(&base("http://127.0.0.1:8080/proxy"), &["a", "b"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/a/b");
    }

    #[test]
    fn join_segments_encodes_identifier() {
        let url = join_segments(&base("https://example.com"), &["list", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/list/a%2Fb%20c");
    }

    #[test]
    fn join_segments_rejects_opaque_base() {
        let err = join_segments(&base("mailto:someone@example.com"), &["x"]).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn full_url_appends_query_in_order() {
        let spec = RequestSpec::get(base("https://example.com/cards"))
            .query("key", "k")
            .query("token", "t");
        assert_eq!(spec.full_url().as_str(), "https://example.com/cards?key=k&token=t");
        assert_eq!(spec.url.query(), None);
    }

    #[test]
    fn full_url_without_query_has_no_question_mark() {
        let spec = RequestSpec::get(base("https://example.com/task"));
        assert_eq!(spec.full_url().as_str(), "https://example.com/task");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let spec = RequestSpec::get(base("https://example.com")).header("Authorization", "ct");
        assert_eq!(spec.header_value("authorization"), Some("ct"));
        assert_eq!(spec.header_value("accept"), None);
    }
}
