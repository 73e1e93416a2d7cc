// src/slack/chunk.rs
// =============================================================================
// Splits mrkdwn text into pieces small enough for one Slack section block.
//
// Slack rejects a section whose text is longer than 3000 characters, so the
// notes are cut into chunks of at most `limit` characters. Cuts only happen
// between lines. A line that is longer than the limit on its own is not
// split; it becomes an oversized chunk of its own.
//
// Lengths are counted in chars (Unicode scalar values), not bytes: "•" is
// one character to Slack but three bytes in UTF-8.
// =============================================================================

use std::num::NonZeroUsize;

/// Default characters per section block, leaving headroom under Slack's 3000.
pub const DEFAULT_SECTION_LIMIT: NonZeroUsize = match NonZeroUsize::new(2800) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Splits `text` into trimmed, non-empty chunks of whole lines.
///
/// Lines keep their trailing newline while being measured, so a chunk's
/// length includes the line breaks inside it.
///
/// # Example
///
/// ```text
/// chunk("aaaa\naaaa\naaaa", 10) == ["aaaa\naaaa", "aaaa"]
/// ```
pub fn chunk(text: &str, limit: NonZeroUsize) -> Vec<String> {
    let limit = limit.get();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut length = 0;

    for line in text.split_inclusive('\n') {
        let line_length = line.chars().count();

        if length > 0 && length + line_length > limit {
            flush(&mut chunks, &current);
            current.clear();
            length = 0;
        }

        current.push_str(line);
        length += line_length;
    }

    flush(&mut chunks, &current);
    chunks
}

fn flush(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
