// src/slack/mrkdwn.rs
// =============================================================================
// Converts GitHub-flavored Markdown into Slack's "mrkdwn" dialect.
//
// This is not a Markdown parser. It is five line-oriented regex passes run in
// a fixed order, because later passes rely on earlier syntax being gone:
//
//   1. headers     "## Fixes"          -> "*Fixes*"
//   2. links       "[docs](https://x)" -> "<https://x|docs>"
//   3. checkboxes  "- [x] done"        -> "• done"
//   4. bullets     "  - item"          -> "• item"
//   5. tables      "| A | B |"         -> "• A — B"
//
// Known limitations, kept as-is:
// - fence lines (```) are only exempt from the bullet pass, and only the
//   fence line itself; the content between fences is converted like any
//   other text
// - any line with a pipe and no "---" is treated as a table row, so prose
//   such as "a | b" becomes "• a — b" and separator rows ("|---|---|") are
//   left in the output untouched
//
// Rust concepts:
// - LazyLock: compile each regex once, on first use
// - Cow: Regex::replace_all only allocates when something matched
// =============================================================================

use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6})\s+(.*)$").expect("Failed to compile header regex")
});

// Non-greedy on both halves: no nested brackets, no ")" inside the URL
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Failed to compile link regex"));

static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)- \[[ x]\][ \t]+").expect("Failed to compile checkbox regex")
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s").expect("Failed to compile bullet regex"));

// A link as produced by the link pass: "<url|text>", with no spaces in the url
static SLACK_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^<>|\s]+\|[^<>\n]*>").expect("Failed to compile Slack link regex")
});

const BULLET_GLYPH: &str = "• ";
const CELL_SEPARATOR: &str = " — ";
const FENCE: &str = "```";

/// Runs every pass in order and trims the result.
///
/// Never fails: text that matches none of the patterns passes through
/// unchanged.
pub fn normalize(markdown: &str) -> String {
    let text = convert_headers(markdown);
    let text = convert_links(&text);
    let text = convert_checkboxes(&text);
    let text = convert_bullets(&text);
    let text = convert_tables(&text);
    text.trim().to_string()
}

/// `# Title` through `###### Title` become `*Title*`.
pub fn convert_headers(markdown: &str) -> String {
    HEADER
        .replace_all(markdown, |caps: &Captures| format!("*{}*", caps[2].trim()))
        .into_owned()
}

/// `[text](url)` becomes `<url|text>`.
pub fn convert_links(markdown: &str) -> String {
    LINK.replace_all(markdown, "<${2}|${1}>").into_owned()
}

/// Task list items lose their checkbox; checked and unchecked look the same.
pub fn convert_checkboxes(markdown: &str) -> String {
    CHECKBOX
        .replace_all(markdown, format!("${{1}}{}", BULLET_GLYPH).as_str())
        .into_owned()
}

/// `- item` and `* item`, indented or not, become `• item`.
pub fn convert_bullets(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(|line| {
            if line.trim_start().starts_with(FENCE) {
                line.to_string()
            } else {
                BULLET.replacen(line, 1, BULLET_GLYPH).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flattens table rows into bullet lines, one cell after another.
pub fn convert_tables(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| table_row(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

// Returns the flattened row, or None when the line should pass through
fn table_row(line: &str) -> Option<String> {
    if line.contains("---") {
        return None;
    }

    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let cells: Vec<&str> = split_cells(inner).into_iter().map(str::trim).collect();
    if cells.len() < 2 {
        return None;
    }

    Some(format!("{}{}", BULLET_GLYPH, cells.join(CELL_SEPARATOR)))
}

// Splits on '|' except where the pipe belongs to a "<url|text>" link
fn split_cells(row: &str) -> Vec<&str> {
    let links: Vec<(usize, usize)> = SLACK_LINK
        .find_iter(row)
        .map(|m| (m.start(), m.end()))
        .collect();
    let inside_link = |pos: usize| links.iter().any(|&(start, end)| start < pos && pos < end);

    let mut cells = Vec::new();
    let mut cell_start = 0;
    for (pos, _) in row.match_indices('|') {
        if inside_link(pos) {
            continue;
        }
        cells.push(&row[cell_start..pos]);
        cell_start = pos + 1;
    }
    cells.push(&row[cell_start..]);
    cells
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why LazyLock<Regex>?
//    - Regex::new parses and compiles the pattern, which is not free
//    - A static LazyLock runs the closure once, the first time the regex is
//      used, and every later call reuses the compiled value
//    - The patterns are fixed strings, so the expect() can only fire if the
//      source code itself is wrong
//
// 2. What does (?m) do?
//    - Multi-line mode: ^ and $ match at every line start/end, not just at
//      the start/end of the whole string
//
// 3. Why .into_owned()?
//    - replace_all returns Cow<str>: borrowed when nothing matched, owned
//      otherwise. into_owned() gives us a String either way
//
// 4. What is "${1}" in a replacement?
//    - It refers to capture group 1. The braces keep the regex crate from
//      reading the following characters as part of the group name
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_become_bold() {
        assert_eq!(convert_headers("# Title"), "*Title*");
        assert_eq!(convert_headers("###   Spaced out   "), "*Spaced out*");
        assert_eq!(convert_headers("intro\n## Fixes\nmore"), "intro\n*Fixes*\nmore");
    }

    #[test]
    fn test_header_leaves_no_hash() {
        let out = normalize("# Title\n\n## Sub title");
        assert!(out.contains("*Title*"));
        assert!(out.contains("*Sub title*"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn test_seven_hashes_is_not_a_header() {
        assert_eq!(convert_headers("####### nope"), "####### nope");
        assert_eq!(convert_headers("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            convert_links("See [docs](https://x.com) and [API](https://x.com/api)."),
            "See <https://x.com|docs> and <https://x.com/api|API>."
        );
    }

    #[test]
    fn test_link_survives_full_pipeline() {
        let out = normalize("Read the [upgrade guide](https://example.com/upgrade) first");
        assert_eq!(out, "Read the <https://example.com/upgrade|upgrade guide> first");
        assert!(!out.contains("]("));
    }

    #[test]
    fn test_checkboxes_lose_state() {
        assert_eq!(normalize("- [ ] item"), "• item");
        assert_eq!(normalize("- [x] item"), "• item");
    }

    #[test]
    fn test_indented_checkbox_keeps_indent() {
        assert_eq!(convert_checkboxes("  - [x] nested"), "  • nested");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(convert_bullets("- one\n* two\n    - three"), "• one\n• two\n• three");
    }

    #[test]
    fn test_bold_line_is_not_a_bullet() {
        assert_eq!(convert_bullets("*Release Notes*"), "*Release Notes*");
    }

    #[test]
    fn test_fence_line_passes_through() {
        assert_eq!(convert_bullets("```- not a bullet"), "```- not a bullet");
        assert_eq!(convert_bullets("  ```"), "  ```");
    }

    #[test]
    fn test_fence_content_is_still_converted() {
        let md = "```\n- inside a fence\n```";
        assert_eq!(convert_bullets(md), "```\n• inside a fence\n```");
    }

    #[test]
    fn test_two_column_row() {
        assert_eq!(convert_tables("| A | B |"), "• A — B");
    }

    #[test]
    fn test_table_with_separator_row() {
        let md = "| Name | Value |\n|------|-------|\n| x | 1 |";
        assert_eq!(convert_tables(md), "• Name — Value\n|------|-------|\n• x — 1");
    }

    #[test]
    fn test_single_cell_row_passes_through() {
        assert_eq!(convert_tables("| lonely |"), "| lonely |");
    }

    #[test]
    fn test_pipe_in_prose_is_treated_as_row() {
        assert_eq!(convert_tables("this | that"), "• this — that");
    }

    #[test]
    fn test_link_pipe_is_not_a_cell_separator() {
        assert_eq!(convert_tables("see <https://x.com|docs>"), "see <https://x.com|docs>");
        assert_eq!(
            convert_tables("| <https://x.com|docs> | ok |"),
            "• <https://x.com|docs> — ok"
        );
    }

    #[test]
    fn test_angle_brackets_in_prose_are_not_links() {
        assert_eq!(
            normalize("latency < 5ms | throughput > 1k"),
            "• latency < 5ms — throughput > 1k"
        );
    }

    #[test]
    fn test_table_cells_with_links() {
        let out = normalize("| PR | Author |\n| --- | --- |\n| [#12](https://x.com/12) | @dev |");
        assert_eq!(out, "• PR — Author\n| --- | --- |\n• <https://x.com/12|#12> — @dev");
    }

    #[test]
    fn test_release_notes_example() {
        let out = normalize("# Release Notes\n- [x] Fixed bug\n[docs](https://x.com)");
        assert_eq!(out, "*Release Notes*\n• Fixed bug\n<https://x.com|docs>");
    }

    #[test]
    fn test_output_is_trimmed() {
        assert_eq!(normalize("\n\n  plain text  \n\n"), "plain text");
        assert_eq!(normalize(""), "");
    }
}
