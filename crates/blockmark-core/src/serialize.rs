//! Block tree serialization
//!
//! Converts typed blocks into Markdown text. Top-level blocks and the
//! children of a list item are joined with a blank line; list children are
//! then indented as one unit below their parent line.

use crate::ast::{Block, Inline, Styles};
use crate::options::Options;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Serialize a sequence of blocks to a Markdown document
pub fn serialize(blocks: &[Block], options: &Options) -> String {
    let mut output = String::with_capacity(blocks.len() * 64);
    serialize_blocks(blocks, options, &mut output);
    output
}

/// Render a single block, including its indented children
pub fn render_block(block: &Block, options: &Options) -> String {
    let mut output = String::new();
    serialize_block(block, options, &mut output);
    output
}

/// Render a sequence of inline runs with no separators between them
pub fn render_inlines(inlines: &[Inline], options: &Options) -> String {
    let mut output = String::new();
    serialize_inlines(inlines, options, &mut output);
    output
}

/// Prefix every line of `text` with the configured indent
pub fn indent(text: &str, options: &Options) -> String {
    let mut output = String::with_capacity(text.len() + options.indent.len());
    push_indented(text, &options.indent, &mut output);
    output
}

fn serialize_blocks(blocks: &[Block], options: &Options, out: &mut String) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        serialize_block(block, options, out);
    }
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            serialize_inlines(content, options, out);
        }

        Block::Paragraph(content) | Block::Other { content, .. } => {
            serialize_inlines(content, options, out);
        }

        Block::BulletListItem { content, children } => {
            out.push(options.bullet_list_marker);
            out.push(' ');
            serialize_list_item(content, children, options, out);
        }

        Block::NumberedListItem { content, children } => {
            // Always `1.`; renumbering is left to the Markdown renderer
            out.push_str("1. ");
            serialize_list_item(content, children, options, out);
        }

        Block::CheckListItem {
            checked,
            content,
            children,
        } => {
            out.push(options.bullet_list_marker);
            out.push_str(if *checked { " [x] " } else { " [ ] " });
            serialize_list_item(content, children, options, out);
        }

        Block::Image { url, caption, name } => {
            let alt = caption.as_deref().or(name.as_deref()).unwrap_or("image");
            out.push_str("![");
            out.push_str(alt);
            out.push_str("](");
            out.push_str(url);
            out.push(')');
        }

        Block::CodeBlock { language, content } => {
            out.push_str(&options.fence);
            out.push_str(language.as_deref().unwrap_or(""));
            out.push('\n');
            serialize_inlines(content, options, out);
            out.push('\n');
            out.push_str(&options.fence);
        }

        Block::Quote(content) => {
            out.push_str("> ");
            serialize_inlines(content, options, out);
        }

        Block::Markdown(markdown) => out.push_str(markdown),
    }
}

fn serialize_list_item(
    content: &[Inline],
    children: &[Block],
    options: &Options,
    out: &mut String,
) {
    serialize_inlines(content, options, out);

    if children.is_empty() {
        return;
    }

    let children_text = serialize(children, options);
    if !children_text.is_empty() {
        out.push('\n');
        push_indented(&children_text, &options.indent, out);
    }
}

fn push_indented(text: &str, indent: &str, out: &mut String) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(line);
    }
}

fn serialize_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, out);
    }
}

fn serialize_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text { text, styles } => {
            if styles.is_plain() {
                out.push_str(text);
            } else {
                out.push_str(&apply_styles(text, styles, options));
            }
        }

        Inline::Link { content, href } => {
            out.push('[');
            serialize_inlines(content, options, out);
            out.push_str("](");
            out.push_str(href);
            out.push(')');
        }
    }
}

/// Wrap `text` in style delimiters; the order is fixed so combined styles nest
/// the same way every time: bold innermost, then italic, strike, code.
fn apply_styles(text: &str, styles: &Styles, options: &Options) -> String {
    let mut styled = text.to_string();
    if styles.bold {
        styled = wrap(&styled, &options.strong_delimiter);
    }
    if styles.italic {
        let mut buf = [0u8; 4];
        styled = wrap(&styled, options.em_delimiter.encode_utf8(&mut buf));
    }
    if styles.strike {
        styled = wrap(&styled, &options.strike_delimiter);
    }
    if styles.code {
        styled = wrap(&styled, "`");
    }
    styled
}

fn wrap(inner: &str, delimiter: &str) -> String {
    let mut out = String::with_capacity(inner.len() + delimiter.len() * 2);
    out.push_str(delimiter);
    out.push_str(inner);
    out.push_str(delimiter);
    out
}
