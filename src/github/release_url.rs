// src/github/release_url.rs
// =============================================================================
// Parses a release page URL into the pieces the GitHub API needs.
//
// Accepted shape:
//   https://<host>/<owner>/<repo>/releases/tag/<tag>
//
// The host is not checked, so GitHub Enterprise URLs work too. Anything after
// the tag segment is ignored.
//
// Example:
//   "https://github.com/acme/widget/releases/tag/v1.2.3"
//     -> owner "acme", repo "widget", tag "v1.2.3"
// =============================================================================

use crate::error::{NotifyError, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseUrl {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

impl ReleaseUrl {
    pub fn parse(release_url: &str) -> Result<Self> {
        let invalid = || NotifyError::InvalidReleaseUrl(release_url.to_string());

        let url = Url::parse(release_url).map_err(|_| invalid())?;

        // "/acme/widget/releases/tag/v1/" -> ["acme", "widget", "releases", "tag", "v1"]
        let parts: Vec<&str> = url.path().trim_matches('/').split('/').collect();

        if parts.len() < 5 || parts[2] != "releases" || parts[3] != "tag" {
            return Err(invalid());
        }

        Ok(Self {
            owner: parts[0].to_string(),
            repo: parts[1].to_string(),
            tag: parts[4].to_string(),
        })
    }

    /// REST endpoint for this release, relative to `api_base`
    /// (e.g., https://api.github.com).
    pub fn api_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/tags/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.tag
        )
    }
}
