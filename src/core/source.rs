//! Supported task sources.

use serde::{Deserialize, Serialize};

use crate::error::{FetchError, Result};

// =============================================================================
// Source Enum
// =============================================================================

/// Project-management services taskfetch can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Ticket tracker search API.
    Jira,
    /// Per-board card listing.
    Trello,
    /// Per-list task listing.
    ClickUp,
}

impl Source {
    /// All sources in display order.
    pub const ALL: &'static [Self] = &[Self::Jira, Self::Trello, Self::ClickUp];

    /// CLI name for this source.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Jira => "jira",
            Self::Trello => "trello",
            Self::ClickUp => "clickup",
        }
    }

    /// Display name for human output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Jira => "Jira",
            Self::Trello => "Trello",
            Self::ClickUp => "ClickUp",
        }
    }

    /// Environment variables holding this source's credentials.
    #[must_use]
    pub const fn credential_vars(self) -> &'static [&'static str] {
        match self {
            Self::Jira => &["JIRA_TOKEN"],
            Self::Trello => &["TRELLO_KEY", "TRELLO_TOKEN"],
            Self::ClickUp => &["CLICKUP_TOKEN"],
        }
    }

    /// Parse from CLI argument.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidSource`] for anything but the supported names.
    pub fn from_cli_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|s| s.cli_name() == lower)
            .copied()
            .ok_or_else(|| FetchError::InvalidSource(name.to_string()))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl std::str::FromStr for Source {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_cli_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(Source::from_cli_name("jira").unwrap(), Source::Jira);
        assert_eq!(Source::from_cli_name("trello").unwrap(), Source::Trello);
        assert_eq!(Source::from_cli_name("clickup").unwrap(), Source::ClickUp);
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Source::from_cli_name("JIRA").unwrap(), Source::Jira);
        assert_eq!(Source::from_cli_name("ClickUp").unwrap(), Source::ClickUp);
    }

    #[test]
    fn unknown_name_is_invalid_source() {
        let err = Source::from_cli_name("bogus").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSource(ref name) if name == "bogus"));
    }

    #[test]
    fn cli_names_round_trip() {
        for &source in Source::ALL {
            assert_eq!(source.cli_name().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn trello_needs_two_credentials() {
        assert_eq!(Source::Trello.credential_vars().len(), 2);
    }
}
