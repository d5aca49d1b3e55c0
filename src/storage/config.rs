//! Configuration file loading and resolution.
//!
//! Loads configuration from:
//! - Linux: `~/.config/taskfetch/config.toml`
//! - macOS: `~/Library/Application Support/taskfetch/config.toml`
//! - Windows: `%APPDATA%/taskfetch/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `TASKFETCH_CONFIG`: Override config file path
//! - `TASKFETCH_TIMEOUT`: Request timeout in seconds
//! - `TASKFETCH_PRETTY`: Pretty-print JSON output (1, true, yes, on)
//! - `TASKFETCH_JIRA_BASE_URL`, `TASKFETCH_TRELLO_BASE_URL`,
//!   `TASKFETCH_CLICKUP_BASE_URL`: API roots
//!
//! Credentials are not part of the config file; see
//! [`Credentials`](crate::core::credentials::Credentials).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::Cli;
use crate::core::http::DEFAULT_TIMEOUT;
use crate::core::source::Source;
use crate::error::{FetchError, Result};
use crate::providers::{clickup, jira, trello};
use crate::util::env::{env_non_empty, is_truthy};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "TASKFETCH_CONFIG";
/// Environment variable for timeout in seconds.
pub const ENV_TIMEOUT: &str = "TASKFETCH_TIMEOUT";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "TASKFETCH_PRETTY";
/// Environment variable for the Jira site root.
pub const ENV_JIRA_BASE_URL: &str = "TASKFETCH_JIRA_BASE_URL";
/// Environment variable for the Trello API root.
pub const ENV_TRELLO_BASE_URL: &str = "TASKFETCH_TRELLO_BASE_URL";
/// Environment variable for the ClickUp API root.
pub const ENV_CLICKUP_BASE_URL: &str = "TASKFETCH_CLICKUP_BASE_URL";

/// Accepted timeout range in seconds.
const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=300;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// API roots per source.
    pub base_urls: BaseUrls,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// API root for each source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub jira: Url,
    pub trello: Url,
    pub clickup: Url,
}

impl BaseUrls {
    /// Base URL for `source`.
    #[must_use]
    pub const fn for_source(&self, source: Source) -> &Url {
        match source {
            Source::Jira => &self.jira,
            Source::Trello => &self.trello,
            Source::ClickUp => &self.clickup,
        }
    }
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub timeout: ConfigSource,
    pub pretty: ConfigSource,
    pub jira: ConfigSource,
    pub trello: ConfigSource,
    pub clickup: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but is invalid
    /// - Any resolved value is invalid (timeout out of range, bad URL)
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Self::load_config()?;
        Self::resolve_with(cli, &config, env_non_empty)
    }

    /// Resolve against an already-loaded config and an explicit env lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ResolvedConfig::resolve`], minus file loading.
    pub fn resolve_with(
        cli: &Cli,
        config: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        config.validate()?;

        let mut sources = ConfigSources::default();

        let timeout = Self::resolve_timeout(cli, config, &env, &mut sources.timeout)?;
        let pretty = Self::resolve_pretty(cli, config, &env, &mut sources.pretty);
        let base_urls = BaseUrls {
            jira: Self::resolve_base_url(Source::Jira, config, &env, &mut sources.jira)?,
            trello: Self::resolve_base_url(Source::Trello, config, &env, &mut sources.trello)?,
            clickup: Self::resolve_base_url(Source::ClickUp, config, &env, &mut sources.clickup)?,
        };

        tracing::debug!(
            timeout_secs = timeout.as_secs(),
            timeout_from = %sources.timeout,
            pretty,
            pretty_from = %sources.pretty,
            jira_base_url = %base_urls.jira,
            jira_from = %sources.jira,
            trello_base_url = %base_urls.trello,
            trello_from = %sources.trello,
            clickup_base_url = %base_urls.clickup,
            clickup_from = %sources.clickup,
            "Configuration resolved"
        );

        Ok(Self {
            timeout,
            pretty,
            base_urls,
            sources,
        })
    }

    fn load_config() -> Result<Config> {
        if let Some(path) = env_non_empty(ENV_CONFIG) {
            return Config::load_from(Path::new(&path));
        }
        Config::load()
    }

    fn resolve_timeout(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<Duration> {
        let (secs, from) = if let Some(secs) = cli.timeout {
            (secs, ConfigSource::Cli)
        } else if let Some(raw) = env(ENV_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                FetchError::Config(format!("{ENV_TIMEOUT} must be a number of seconds, got '{raw}'"))
            })?;
            (secs, ConfigSource::Env)
        } else if let Some(secs) = config.general.timeout_seconds {
            (secs, ConfigSource::ConfigFile)
        } else {
            (DEFAULT_TIMEOUT.as_secs(), ConfigSource::Default)
        };

        if !TIMEOUT_RANGE.contains(&secs) {
            return Err(FetchError::Config(format!(
                "Timeout must be between {} and {} seconds (from {from})",
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end()
            )));
        }

        *source = from;
        Ok(Duration::from_secs(secs))
    }

    fn resolve_pretty(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if let Some(raw) = env(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return is_truthy(&raw);
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    fn resolve_base_url(
        target: Source,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<Url> {
        let (raw, from) = if let Some(raw) = env(base_url_env(target)) {
            (raw, ConfigSource::Env)
        } else if let Some(raw) = &config.sources.for_source(target).base_url {
            (raw.clone(), ConfigSource::ConfigFile)
        } else {
            (default_base_url(target).to_string(), ConfigSource::Default)
        };

        *source = from;
        parse_base_url(target, &raw)
    }
}

/// Environment variable overriding the API root of `source`.
#[must_use]
pub const fn base_url_env(source: Source) -> &'static str {
    match source {
        Source::Jira => ENV_JIRA_BASE_URL,
        Source::Trello => ENV_TRELLO_BASE_URL,
        Source::ClickUp => ENV_CLICKUP_BASE_URL,
    }
}

/// Built-in API root of `source`.
#[must_use]
pub const fn default_base_url(source: Source) -> &'static str {
    match source {
        Source::Jira => jira::DEFAULT_BASE_URL,
        Source::Trello => trello::DEFAULT_BASE_URL,
        Source::ClickUp => clickup::DEFAULT_BASE_URL,
    }
}

/// Parse and check an API root.
fn parse_base_url(source: Source, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        FetchError::Config(format!("Invalid base URL for {source} \"{raw}\": {e}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::Config(format!(
            "Base URL for {source} must use http or https, got \"{raw}\""
        )));
    }

    Ok(url)
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Per-source settings.
    pub sources: SourcesConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Timeout for network requests in seconds. `None` falls back to the
    /// client default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

/// Settings for each source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub jira: SourceSettings,
    pub trello: SourceSettings,
    pub clickup: SourceSettings,
}

impl SourcesConfig {
    /// Settings for `source`.
    #[must_use]
    pub const fn for_source(&self, source: Source) -> &SourceSettings {
        match source {
            Source::Jira => &self.jira,
            Source::Trello => &self.trello,
            Source::ClickUp => &self.clickup,
        }
    }
}

/// Settings for a specific source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Custom API base URL (if different from default).
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FetchError::Config(format!("Invalid config file {}: {e}", path.display())))
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        AppPaths::new().config_file()
    }

    /// Validate configuration values.
    ///
    /// Checks that the timeout is within 1-300 seconds and that every
    /// configured base URL parses.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if let Some(secs) = self.general.timeout_seconds
            && !TIMEOUT_RANGE.contains(&secs)
        {
            return Err(FetchError::Config(
                "Timeout must be between 1 and 300 seconds".to_string(),
            ));
        }

        for &source in Source::ALL {
            if let Some(raw) = &self.sources.for_source(source).base_url {
                parse_base_url(source, raw)?;
            }
        }

        Ok(())
    }
}
