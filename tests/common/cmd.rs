//! Isolated invocations of the taskfetch binary.
#![allow(dead_code)]

use assert_cmd::Command;

/// Every variable the binary reads. Removed before each run so the
/// developer's own shell does not leak in.
pub const TASKFETCH_VARS: &[&str] = &[
    "JIRA_TOKEN",
    "TRELLO_KEY",
    "TRELLO_TOKEN",
    "CLICKUP_TOKEN",
    "TASKFETCH_CONFIG",
    "TASKFETCH_TIMEOUT",
    "TASKFETCH_PRETTY",
    "TASKFETCH_JIRA_BASE_URL",
    "TASKFETCH_TRELLO_BASE_URL",
    "TASKFETCH_CLICKUP_BASE_URL",
    "TASKFETCH_LOG",
    "TASKFETCH_LOG_FORMAT",
    "TASKFETCH_LOG_FILE",
    "RUST_LOG",
];

/// A `taskfetch` command with a clean environment and no config file.
#[allow(deprecated)]
pub fn taskfetch() -> Command {
    let mut cmd = Command::cargo_bin("taskfetch").expect("taskfetch binary");
    for var in TASKFETCH_VARS {
        cmd.env_remove(var);
    }
    cmd.env("TASKFETCH_CONFIG", "/nonexistent/taskfetch/config.toml");
    cmd
}

/// Like [`taskfetch`], with every source's base URL pointed at `base`.
pub fn taskfetch_against(base: &str) -> Command {
    let mut cmd = taskfetch();
    cmd.env("TASKFETCH_JIRA_BASE_URL", base)
        .env("TASKFETCH_TRELLO_BASE_URL", base)
        .env("TASKFETCH_CLICKUP_BASE_URL", base);
    cmd
}
