// src/github/mod.rs
// =============================================================================
// The GitHub side of a notification.
//
// - release_url: turns a release page URL into owner / repo / tag
// - fetch: reads the release's title and notes from the REST API
// =============================================================================

mod fetch;
mod release_url;

pub use fetch::fetch_release;
