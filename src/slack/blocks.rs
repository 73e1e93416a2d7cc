// src/slack/blocks.rs
// =============================================================================
// Slack Block Kit types and the layout of a release message.
//
// A message is an ordered list of blocks. Serialized with serde, each block
// becomes a JSON object whose "type" field names the variant:
//
//   {"type": "section", "text": {"type": "mrkdwn", "text": "..."}}
//   {"type": "divider"}
//
// The release message always has the same shape:
//
//   section   *<release url|title>*
//   divider
//   header    Details
//   section   (one per chunk of the release notes)
//   context   Posted automatically via GitHub Action
// =============================================================================

use super::chunk::chunk;
use serde::Serialize;
use std::num::NonZeroUsize;

const DETAILS_HEADER: &str = "Details";
const ATTRIBUTION: &str = "Posted automatically via GitHub Action";

/// One Block Kit block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Main content block
    Section { text: TextObject },
    /// Horizontal rule
    Divider,
    /// Large plain-text heading
    Header { text: TextObject },
    /// Small print under the message
    Context { elements: Vec<TextObject> },
}

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String, emoji: bool },
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: true,
        }
    }
}

/// The JSON body posted to an incoming webhook: `{"blocks": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    pub blocks: Vec<Block>,
}

impl Payload {
    /// Number of section blocks carrying release notes.
    pub fn body_sections(&self) -> usize {
        // Title section + divider + header come first, context comes last
        self.blocks.len().saturating_sub(4)
    }
}

/// Lays out a release message.
///
/// `text` must already be mrkdwn; it is split into sections of at most
/// `limit` characters. Empty notes produce no body sections at all.
pub fn build_blocks(release_url: &str, title: &str, text: &str, limit: NonZeroUsize) -> Vec<Block> {
    let mut blocks = vec![
        Block::Section {
            text: TextObject::mrkdwn(format!("*<{}|{}>*", release_url, title)),
        },
        Block::Divider,
        Block::Header {
            text: TextObject::plain(DETAILS_HEADER),
        },
    ];

    blocks.extend(chunk(text, limit).into_iter().map(|piece| Block::Section {
        text: TextObject::mrkdwn(piece),
    }));

    blocks.push(Block::Context {
        elements: vec![TextObject::mrkdwn(ATTRIBUTION)],
    });

    blocks
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(tag = "type")] do?
//    - It makes an "internally tagged" enum: the variant name is stored in a
//      "type" field next to the variant's own fields
//    - rename_all = "snake_case" turns PlainText into "plain_text"
//    - A unit variant like Divider serializes to just {"type": "divider"}
//
// 2. Why impl Into<String>?
//    - Callers can pass either &str or String without converting first
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::chunk::DEFAULT_SECTION_LIMIT;
    use serde_json::json;

    const URL: &str = "https://github.com/acme/widget/releases/tag/v1.2.3";

    #[test]
    fn test_block_shapes() {
        let blocks = build_blocks(URL, "widget v1.2.3", "*Fixes*\n• one", DEFAULT_SECTION_LIMIT);
        let value = serde_json::to_value(Payload { blocks }).unwrap();

        assert_eq!(
            value,
            json!({
                "blocks": [
                    {"type": "section", "text": {"type": "mrkdwn", "text": format!("*<{}|widget v1.2.3>*", URL)}},
                    {"type": "divider"},
                    {"type": "header", "text": {"type": "plain_text", "text": "Details", "emoji": true}},
                    {"type": "section", "text": {"type": "mrkdwn", "text": "*Fixes*\n• one"}},
                    {"type": "context", "elements": [{"type": "mrkdwn", "text": "Posted automatically via GitHub Action"}]}
                ]
            })
        );
    }

    #[test]
    fn test_one_section_per_chunk() {
        let text = "aaaa\nbbbb\ncccc";
        let blocks = build_blocks(URL, "t", text, NonZeroUsize::new(5).unwrap());
        let payload = Payload { blocks };

        assert_eq!(payload.body_sections(), 3);
        let bodies: Vec<_> = payload.blocks[3..6].iter().cloned().collect();
        assert_eq!(
            bodies,
            vec![
                Block::Section { text: TextObject::mrkdwn("aaaa") },
                Block::Section { text: TextObject::mrkdwn("bbbb") },
                Block::Section { text: TextObject::mrkdwn("cccc") },
            ]
        );
        assert!(matches!(payload.blocks.last(), Some(Block::Context { .. })));
    }

    #[test]
    fn test_empty_notes_have_no_body_sections() {
        let blocks = build_blocks(URL, "t", "", DEFAULT_SECTION_LIMIT);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1], Block::Divider);
        assert!(matches!(blocks[3], Block::Context { .. }));
    }
}
