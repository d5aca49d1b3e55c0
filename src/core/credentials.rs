//! Credentials captured from the process environment.
//!
//! This is the only place credential variables are read. The values are
//! captured once at startup and handed to adapters at construction, so
//! adapters never touch the environment themselves.

use crate::core::source::Source;
use crate::util::env::env_value;

/// Jira bearer token variable.
pub const ENV_JIRA_TOKEN: &str = "JIRA_TOKEN";
/// Trello API key variable.
pub const ENV_TRELLO_KEY: &str = "TRELLO_KEY";
/// Trello API token variable.
pub const ENV_TRELLO_TOKEN: &str = "TRELLO_TOKEN";
/// ClickUp personal token variable.
pub const ENV_CLICKUP_TOKEN: &str = "CLICKUP_TOKEN";

/// Raw credential values. `None` means the variable was not set.
///
/// Empty strings are kept as-is; nothing here validates them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub jira_token: Option<String>,
    pub trello_key: Option<String>,
    pub trello_token: Option<String>,
    pub clickup_token: Option<String>,
}

impl Credentials {
    /// Read all credential variables from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_value)
    }

    /// Build credentials from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            jira_token: lookup(ENV_JIRA_TOKEN),
            trello_key: lookup(ENV_TRELLO_KEY),
            trello_token: lookup(ENV_TRELLO_TOKEN),
            clickup_token: lookup(ENV_CLICKUP_TOKEN),
        }
    }

    /// Value for a credential variable name, if known and set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            ENV_JIRA_TOKEN => self.jira_token.as_deref(),
            ENV_TRELLO_KEY => self.trello_key.as_deref(),
            ENV_TRELLO_TOKEN => self.trello_token.as_deref(),
            ENV_CLICKUP_TOKEN => self.clickup_token.as_deref(),
            _ => None,
        }
    }

    /// `(variable, value)` pairs relevant to `source`.
    #[must_use]
    pub fn for_source(&self, source: Source) -> Vec<(&'static str, Option<&str>)> {
        source
            .credential_vars()
            .iter()
            .map(|&name| (name, self.get(name)))
            .collect()
    }
}

// Secrets stay out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "<set>");
        f.debug_struct("Credentials")
            .field("jira_token", &mask(&self.jira_token))
            .field("trello_key", &mask(&self.trello_key))
            .field("trello_token", &mask(&self.trello_token))
            .field("clickup_token", &mask(&self.clickup_token))
            .finish()
    }
}
