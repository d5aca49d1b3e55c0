//! CLI argument parsing and command execution.

pub mod args;
pub mod fetch;

pub use args::Cli;
