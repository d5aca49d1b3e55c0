//! Common test utilities for integration tests.
//!
//! # Modules
//!
//! - `cmd`: Isolated invocations of the binary
//! - `logger`: Structured test logging infrastructure

pub mod cmd;
pub mod logger;
