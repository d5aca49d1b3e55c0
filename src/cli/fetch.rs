//! The fetch command.

use std::io::Write;

use serde_json::Value;

use crate::cli::args::Cli;
use crate::core::credentials::Credentials;
use crate::core::dispatch::dispatch;
use crate::core::doctor::CredentialReport;
use crate::core::source::Source;
use crate::error::Result;
use crate::storage::config::ResolvedConfig;

/// Execute a fetch (or credential check) for the parsed command line.
///
/// # Errors
///
/// Returns the first error hit: invalid source, bad config, missing
/// credentials (check mode only), or any fetch failure.
pub async fn execute(cli: &Cli) -> Result<()> {
    // Reject unknown sources before touching config or the network.
    let source = Source::from_cli_name(&cli.source)?;
    let credentials = Credentials::from_env();

    if cli.check_credentials {
        return execute_check(source, &credentials, &mut std::io::stdout().lock());
    }

    let config = ResolvedConfig::resolve(cli)?;
    let payload = dispatch(source.cli_name(), cli.identifier(), &config, &credentials).await?;

    write_payload(&mut std::io::stdout().lock(), &payload, config.pretty)
}

/// Print the credential report for `source`, failing if anything is unset.
///
/// # Errors
///
/// Returns [`FetchError::MissingCredentials`](crate::error::FetchError::MissingCredentials)
/// after printing the report, or an I/O error.
pub fn execute_check(source: Source, credentials: &Credentials, out: &mut impl Write) -> Result<()> {
    let report = CredentialReport::for_source(source, credentials);
    write!(out, "{report}")?;
    report.into_result().map(|_| ())
}

/// Render the payload exactly as decoded.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn render_payload(payload: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(rendered)
}

/// Write the rendered payload followed by a newline.
///
/// # Errors
///
/// Returns serialization or I/O errors.
pub fn write_payload(out: &mut impl Write, payload: &Value, pretty: bool) -> Result<()> {
    writeln!(out, "{}", render_payload(payload, pretty)?)?;
    out.flush()?;
    Ok(())
}
