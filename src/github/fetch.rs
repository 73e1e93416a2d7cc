// src/github/fetch.rs
// =============================================================================
// Fetches a release from the GitHub REST API.
//
//   GET {api}/repos/{owner}/{repo}/releases/tags/{tag}
//
// Only two fields of the response are used, and GitHub may send either as
// null: `name` (falls back to the tag) and `body` (falls back to "").
//
// Rust concepts:
// - serde Deserialize: unknown JSON fields are ignored, Option<T> accepts null
// - async functions: the request is awaited on the tokio runtime
// =============================================================================

use super::release_url::ReleaseUrl;
use crate::config::Config;
use crate::error::{NotifyError, Result};
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

// Repositories announced under a product name instead of the repo name
const DISPLAY_NAMES: &[(&str, &str)] = &[("django-DefectDojo", "Open-Source DefectDojo")];

/// A release, ready to be turned into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub title: String,
    /// Release notes, still in GitHub Markdown
    pub body: String,
    /// The release page the message links to
    pub url: String,
}

// The subset of GitHub's release object we read
#[derive(Debug, Deserialize)]
struct GithubRelease {
    name: Option<String>,
    body: Option<String>,
}

/// Looks up the release behind `config.release_url`.
pub async fn fetch_release(client: &Client, config: &Config) -> Result<Release> {
    let release_url = ReleaseUrl::parse(&config.release_url)?;
    let api_url = release_url.api_url(&config.github_api_url);
    println!("Fetching GitHub release from {}", api_url);

    let response = client
        .get(&api_url)
        .bearer_auth(&config.github_token)
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    let status = response.status();
    debug!(status = status.as_u16(), "GitHub API responded");

    let text = response.text().await?;
    if status != StatusCode::OK {
        return Err(NotifyError::GithubApi {
            status: status.as_u16(),
            body: text,
        });
    }

    let release: GithubRelease = serde_json::from_str(&text)?;
    let title = release_title(&release_url.repo, release.name.as_deref(), &release_url.tag);
    info!(%title, "fetched release");

    Ok(Release {
        title,
        body: release.body.unwrap_or_default(),
        url: config.release_url.clone(),
    })
}

/// Message title: display name (or repo name), then the release name.
///
/// A missing or empty release name falls back to the tag.
pub fn release_title(repo: &str, name: Option<&str>, tag: &str) -> String {
    let prefix = DISPLAY_NAMES
        .iter()
        .find(|(special, _)| *special == repo)
        .map_or(repo, |(_, display)| *display);

    let name = name.filter(|n| !n.is_empty()).unwrap_or(tag);
    format!("{} {}", prefix, name)
}
