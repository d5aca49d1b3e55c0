//! Error types for taskfetch.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! - **Invalid argument**: unrecognized source name
//! - **Configuration**: config file parsing, invalid override values
//! - **Network**: transport failures and timeouts
//! - **Response**: bodies that are not valid JSON
//! - **Credentials**: only raised by the explicit credential check
//!
//! HTTP error statuses are not errors. Whatever JSON the service returns is
//! handed back to the caller as-is.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad command-line input.
    InvalidArgument,
    /// Config file or environment override problems.
    Configuration,
    /// Connection failures and timeouts.
    Network,
    /// Undecodable response body.
    Response,
    /// Missing or empty credential variables.
    Credentials,
    /// I/O and serialization failures.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid argument",
            Self::Configuration => "Configuration error",
            Self::Network => "Network error",
            Self::Response => "Response error",
            Self::Credentials => "Credential error",
            Self::Internal => "Internal error",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Invalid source, bad config, undecodable response
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Main error type for taskfetch operations.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Source name is not one of the supported services.
    #[error("unsupported source '{0}' (expected one of: jira, trello, clickup)")]
    InvalidSource(String),

    /// Configuration file or override is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Response body could not be decoded as JSON.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// Credential variables for a source are missing or empty.
    #[error("missing credentials for {source_name}: {}", names.join(", "))]
    MissingCredentials {
        source_name: String,
        names: Vec<String>,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidSource(_) | Self::Config(_) | Self::ParseResponse(_) => {
                ExitCode::ParseError
            }
            Self::Timeout(_) => ExitCode::Timeout,
            Self::Network(_)
            | Self::MissingCredentials { .. }
            | Self::Io(_)
            | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSource(_) => ErrorCategory::InvalidArgument,
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Network(_) | Self::Timeout(_) => ErrorCategory::Network,
            Self::ParseResponse(_) => ErrorCategory::Response,
            Self::MissingCredentials { .. } => ErrorCategory::Credentials,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }
}

/// Result type alias for taskfetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
