//! Storage for configuration.

pub mod config;
pub mod paths;

pub use config::{
    BaseUrls, Config, ConfigSource, ConfigSources, ResolvedConfig, ENV_CLICKUP_BASE_URL,
    ENV_CONFIG, ENV_JIRA_BASE_URL, ENV_PRETTY, ENV_TIMEOUT, ENV_TRELLO_BASE_URL,
};
pub use paths::AppPaths;
