// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// release-notifier usually runs inside a GitHub Action, where inputs arrive
// as environment variables. Every flag therefore has an `env = "..."`
// fallback: `--release-url` on the command line wins, otherwise
// RELEASE_URL from the environment is used.
//
// The three required inputs are Option<String> and are validated in
// config.rs, so a missing value produces our own "Missing required input"
// message instead of clap's usage error.
// =============================================================================

use crate::error::Result;
use crate::slack::DEFAULT_SECTION_LIMIT;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[command(
    name = "release-notifier",
    version,
    about = "Post a GitHub release's notes to Slack as a Block Kit message",
    long_about = "release-notifier fetches a GitHub release, converts its Markdown notes to \
                  Slack mrkdwn, splits them into section blocks and posts the result to an \
                  incoming webhook."
)]
pub struct Cli {
    /// Slack incoming webhook URL the message is posted to
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub slack_webhook_url: Option<String>,

    /// Release page URL (e.g., https://github.com/owner/repo/releases/tag/v1.0.0)
    #[arg(long, env = "RELEASE_URL")]
    pub release_url: Option<String>,

    /// Token used to read the release from the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Base URL of the GitHub REST API
    ///
    /// Point this at a GitHub Enterprise Server instance
    /// (e.g., https://ghe.example.com/api/v3)
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Maximum number of characters per Slack section block
    #[arg(long, env = "SLACK_SECTION_LIMIT", default_value_t = DEFAULT_SECTION_LIMIT)]
    pub chunk_limit: NonZeroUsize,

    /// Timeout for each HTTP request, in seconds
    #[arg(
        long,
        env = "NOTIFY_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print the Block Kit payload as JSON instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter used when RUST_LOG is not set (e.g., debug, info, warn)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Parses the command line.
///
/// `--help` and `--version` print and exit the way clap always does. Every
/// other parse failure (say, SLACK_SECTION_LIMIT=0) comes back as an error so
/// it is reported like any other fatal input problem.
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(e.into()),
    }
}
