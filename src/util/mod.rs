//! Utility functions.

pub mod env;

pub use env::{env_non_empty, env_value, is_truthy};
