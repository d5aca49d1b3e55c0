//! Credential presence checks.
//!
//! Fetching never fails on missing credentials; the request simply goes out
//! without them. This module backs `--check-credentials`, the explicit way to
//! find out before the remote service rejects the request.

use std::fmt;

use crate::core::credentials::Credentials;
use crate::core::source::Source;
use crate::error::{FetchError, Result};

/// State of a single credential variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    /// Set to a non-blank value.
    Set,
    /// Set, but blank.
    Empty,
    /// Not set at all.
    Missing,
}

impl CredentialStatus {
    fn of(value: Option<&str>) -> Self {
        match value {
            None => Self::Missing,
            Some(v) if v.trim().is_empty() => Self::Empty,
            Some(_) => Self::Set,
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => write!(f, "set"),
            Self::Empty => write!(f, "empty"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Credential status for every variable a source uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialReport {
    pub source: Source,
    pub checks: Vec<(&'static str, CredentialStatus)>,
}

impl CredentialReport {
    /// Inspect the credentials `source` needs.
    #[must_use]
    pub fn for_source(source: Source, credentials: &Credentials) -> Self {
        let checks = credentials
            .for_source(source)
            .into_iter()
            .map(|(name, value)| (name, CredentialStatus::of(value)))
            .collect();
        Self { source, checks }
    }

    /// Variables that are missing or empty.
    #[must_use]
    pub fn problems(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|(_, status)| *status != CredentialStatus::Set)
            .map(|(name, _)| *name)
            .collect()
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.problems().is_empty()
    }

    /// Turn a failing report into [`FetchError::MissingCredentials`].
    ///
    /// # Errors
    ///
    /// Returns an error naming every missing or empty variable.
    pub fn into_result(self) -> Result<Self> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(self);
        }
        Err(FetchError::MissingCredentials {
            source_name: self.source.cli_name().to_string(),
            names: problems.into_iter().map(str::to_string).collect(),
        })
    }
}

impl fmt::Display for CredentialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Credentials for {}:", self.source.display_name())?;
        for (name, status) in &self.checks {
            writeln!(f, "  {name:<16} {status}")?;
        }
        Ok(())
    }
}
