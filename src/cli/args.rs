//! CLI argument definitions using clap.

use clap::Parser;

/// Fetch raw task data from Jira, Trello, or ClickUp.
#[derive(Parser, Debug)]
#[command(name = "taskfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source to query (jira, trello, clickup)
    #[arg(long, value_name = "SOURCE")]
    pub source: String,

    /// Project key, board id, or list id, depending on the source
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Report credential variables for the source instead of fetching
    #[arg(long)]
    pub check_credentials: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Identifier forwarded to the adapter. A missing `--project` becomes "".
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.project.as_deref().unwrap_or_default()
    }
}
