//! taskfetch - fetch raw task data from Jira, Trello, or ClickUp.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use taskfetch::cli::Cli;
use taskfetch::core::logging;
use taskfetch::error::ExitCode as FetchExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| logging::parse_log_level_from_env().map(logging::LogLevel::from_tracing_level))
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    match taskfetch::cli::fetch::execute(&cli).await {
        Ok(()) => FetchExitCode::Success.into(),
        Err(e) => {
            tracing::error!(category = %e.category(), "{}", e);
            eprintln!("error: {e}");
            e.exit_code().into()
        }
    }
}
