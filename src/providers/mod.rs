//! Provider-specific adapters.
//!
//! Each provider has its own submodule that turns an identifier into a
//! [`RequestSpec`](crate::core::request::RequestSpec).

pub mod clickup;
pub mod jira;
pub mod trello;

pub use clickup::ClickUpAdapter;
pub use jira::JiraAdapter;
pub use trello::TrelloAdapter;

// Re-export common types
pub use crate::core::source::Source;
