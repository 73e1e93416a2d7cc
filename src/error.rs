// src/error.rs
// =============================================================================
// Every way a notification run can fail.
//
// All of these are fatal: the driver prints the message as a GitHub Actions
// error annotation and exits with status 1. Nothing is retried.
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error from attributes
// - #[from]: lets the ? operator convert library errors automatically
// =============================================================================

use thiserror::Error;

/// Errors produced while fetching a release or posting it to Slack.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A required configuration value was absent or empty.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// A flag or environment variable held a value clap rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The release URL does not look like `/<owner>/<repo>/releases/tag/<tag>`.
    #[error("Unrecognized GitHub release URL: {0}")]
    InvalidReleaseUrl(String),

    /// GitHub answered the release lookup with something other than 200.
    #[error("GitHub API error {status}: {body}")]
    GithubApi { status: u16, body: String },

    /// Slack answered the webhook POST with something other than 200.
    #[error("Slack webhook error {status}: {body}")]
    SlackWebhook { status: u16, body: String },

    /// Transport failure, including timeouts.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub returned a body that is not a release object.
    #[error("Could not decode GitHub release: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotifyError>;

// clap renders a usage block under the message; the annotation keeps the
// first line only
impl From<clap::Error> for NotifyError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered.lines().next().unwrap_or_default();
        NotifyError::InvalidInput(message.trim_start_matches("error: ").to_string())
    }
}
