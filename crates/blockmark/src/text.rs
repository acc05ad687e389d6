//! Plain text extraction for previews and search feeds.

use once_cell::sync::Lazy;
use regex::Regex;

use blockmark_core::inlines_plain_text;

use crate::block::EditorBlock;
use crate::convert::convert_inlines;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const ELLIPSIS: char = '…';

/// Text of every block, one line per block, with markup dropped.
///
/// Children follow their parent whatever its kind. Images contribute their
/// caption or file name.
pub fn plain_text(blocks: &[EditorBlock]) -> String {
    let mut lines = Vec::new();
    collect_lines(blocks, &mut lines);
    lines.join("\n")
}

fn collect_lines(blocks: &[EditorBlock], lines: &mut Vec<String>) {
    for block in blocks {
        let text = if block.kind == "image" {
            block
                .prop_str("caption")
                .filter(|s| !s.is_empty())
                .or_else(|| block.prop_str("name"))
                .unwrap_or_default()
                .to_string()
        } else {
            inlines_plain_text(&convert_inlines(&block.content))
        };

        let line = collapse_whitespace(&text);
        if !line.is_empty() {
            lines.push(line);
        }
        collect_lines(&block.children, lines);
    }
}

/// Single-line plain text of at most `max_chars` characters.
///
/// Longer text is cut at the last word boundary that fits and ends with `…`.
pub fn excerpt(blocks: &[EditorBlock], max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }

    let text = collapse_whitespace(&plain_text(blocks));
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];
    // Keep the whole word when the cut lands exactly before a space
    let head = if text[cut..].starts_with(' ') {
        head
    } else {
        match head.rfind(' ') {
            Some(space) if space > 0 => &head[..space],
            _ => head,
        }
    };

    let mut out = head.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
