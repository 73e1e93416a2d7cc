// src/slack/mod.rs
// =============================================================================
// Everything on the Slack side of a notification.
//
// Submodules:
// - mrkdwn: converts GitHub Markdown into Slack's mrkdwn dialect
// - chunk: splits text into pieces that fit a section block
// - blocks: Block Kit types and the release message layout
// - webhook: posts the finished payload
// =============================================================================

mod blocks;
mod chunk;
mod mrkdwn;
mod webhook;

pub use blocks::{build_blocks, Payload};
pub use chunk::DEFAULT_SECTION_LIMIT;
pub use mrkdwn::normalize;
pub use webhook::post_payload;
