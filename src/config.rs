// src/config.rs
// =============================================================================
// The validated settings for one notification run.
//
// clap collects raw values (flags or environment variables); Config::from_cli
// checks that the required ones are present and freezes them into a single
// value that is handed to every stage. Nothing below main.rs reads the
// environment.
// =============================================================================

use crate::cli::Cli;
use crate::error::{NotifyError, Result};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub slack_webhook_url: String,
    pub release_url: String,
    pub github_token: String,
    pub github_api_url: String,
    pub chunk_limit: NonZeroUsize,
    pub timeout: Duration,
    pub dry_run: bool,
}

// Hand-written so the token and webhook never end up in a log line
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("slack_webhook_url", &"[REDACTED]")
            .field("release_url", &self.release_url)
            .field("github_token", &"[REDACTED]")
            .field("github_api_url", &self.github_api_url)
            .field("chunk_limit", &self.chunk_limit)
            .field("timeout", &self.timeout)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Validates the parsed command line.
    ///
    /// Inputs are checked in the order webhook, release URL, token, and the
    /// first one missing is reported. An empty string counts as missing,
    /// since unset Action inputs arrive as empty variables.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let slack_webhook_url = required(&cli.slack_webhook_url, "slack_webhook_url")?;
        let release_url = required(&cli.release_url, "release_url")?;
        let github_token = required(&cli.github_token, "github_token")?;

        Ok(Self {
            slack_webhook_url,
            release_url,
            github_token,
            github_api_url: cli.github_api_url.trim_end_matches('/').to_string(),
            chunk_limit: cli.chunk_limit,
            timeout: Duration::from_secs(cli.timeout),
            dry_run: cli.dry_run,
        })
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(NotifyError::MissingInput(name)),
    }
}
