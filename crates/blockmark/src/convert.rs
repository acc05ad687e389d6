//! Convert editor blocks to the typed block tree
//!
//! This module resolves each editor block's props into the variant for its
//! kind, so the serializer in blockmark-core never looks at raw JSON.

use blockmark_core::{render_inlines, Block, Inline, Options, Styles};
use serde_json::Value;

use crate::block::{EditorBlock, InlineContent};
use crate::rules::Rules;

const DEFAULT_HEADING_LEVEL: u8 = 1;

/// Convert a sequence of editor blocks
pub fn convert(blocks: &[EditorBlock], options: &Options, rules: &Rules) -> Vec<Block> {
    blocks
        .iter()
        .map(|block| convert_block(block, options, rules))
        .collect()
}

/// Convert one editor block, consulting custom rules first
fn convert_block(block: &EditorBlock, options: &Options, rules: &Rules) -> Block {
    let content = convert_inlines(&block.content);

    if !rules.is_empty() {
        if let Some(rule) = rules.for_block(block) {
            tracing::debug!(kind = %block.kind, "custom rule applied");
            let rendered = render_inlines(&content, options);
            return Block::Markdown(rule.replace(block, &rendered, options));
        }
    }

    match block.kind.as_str() {
        "heading" => Block::Heading {
            level: heading_level(block.prop("level")),
            content,
        },

        "paragraph" => Block::Paragraph(content),

        "bulletListItem" => Block::BulletListItem {
            content,
            children: convert(&block.children, options, rules),
        },

        "numberedListItem" => Block::NumberedListItem {
            content,
            children: convert(&block.children, options, rules),
        },

        "checkListItem" => Block::CheckListItem {
            checked: is_checked(block.prop("checked")),
            content,
            children: convert(&block.children, options, rules),
        },

        "image" => Block::Image {
            url: block.prop_str("url").unwrap_or_default().to_string(),
            caption: non_empty(block.prop_str("caption")),
            name: non_empty(block.prop_str("name")),
        },

        "codeBlock" => Block::CodeBlock {
            language: block.prop_str("language").map(str::to_string),
            content,
        },

        "quote" => Block::Quote(content),

        other => {
            tracing::debug!(kind = other, "no dedicated rendering, using content");
            Block::Other {
                kind: other.to_string(),
                content,
            }
        }
    }
}

/// Convert editor runs to typed inlines
pub fn convert_inlines(runs: &[InlineContent]) -> Vec<Inline> {
    runs.iter().map(convert_inline).collect()
}

fn convert_inline(run: &InlineContent) -> Inline {
    if run.is_link() {
        let content = if run.content.is_empty() {
            vec![styled_text(run)]
        } else {
            convert_inlines(&run.content)
        };
        return Inline::Link {
            content,
            href: run.href.clone().unwrap_or_default(),
        };
    }

    styled_text(run)
}

fn styled_text(run: &InlineContent) -> Inline {
    Inline::styled(
        run.text.clone(),
        Styles {
            bold: run.has_style("bold"),
            italic: run.has_style("italic"),
            strike: run.has_style("strike"),
            code: run.has_style("code"),
        },
    )
}

/// Integer levels in `1..=255`, as a number or numeric string; else 1
fn heading_level(value: Option<&Value>) -> u8 {
    let level = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    level
        .and_then(|l| u8::try_from(l).ok())
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_HEADING_LEVEL)
}

fn is_checked(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(checked)) => *checked,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
