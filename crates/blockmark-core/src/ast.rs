//! Typed block tree
//!
//! This module defines the nodes the serializer works on. Each block kind is
//! its own variant and carries only the attributes its Markdown form needs.

/// A block-level document node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Heading with level and inline content
    Heading { level: u8, content: Vec<Inline> },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Bullet list item with nested blocks
    BulletListItem {
        content: Vec<Inline>,
        children: Vec<Block>,
    },

    /// Numbered list item with nested blocks
    NumberedListItem {
        content: Vec<Inline>,
        children: Vec<Block>,
    },

    /// Task list item with nested blocks
    CheckListItem {
        checked: bool,
        content: Vec<Inline>,
        children: Vec<Block>,
    },

    /// Image with optional caption and file name
    Image {
        url: String,
        caption: Option<String>,
        name: Option<String>,
    },

    /// Fenced code block
    CodeBlock {
        language: Option<String>,
        content: Vec<Inline>,
    },

    /// Single-line block quote
    Quote(Vec<Inline>),

    /// Any block kind without a dedicated rendering
    Other { kind: String, content: Vec<Inline> },

    /// Already rendered Markdown, emitted as-is
    Markdown(String),
}

impl Block {
    /// Nested blocks rendered under this block
    pub fn children(&self) -> &[Block] {
        match self {
            Block::BulletListItem { children, .. }
            | Block::NumberedListItem { children, .. }
            | Block::CheckListItem { children, .. } => children,
            _ => &[],
        }
    }
}

/// Boolean style flags applied to a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Styles {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}

impl Styles {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// An inline text run
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Styled text
    Text { text: String, styles: Styles },

    /// Link wrapping styled runs
    Link { content: Vec<Inline>, href: String },
}

impl Inline {
    /// Unstyled text run
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            styles: Styles::default(),
        }
    }

    pub fn styled(text: impl Into<String>, styles: Styles) -> Self {
        Inline::Text {
            text: text.into(),
            styles,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Inline::Link {
            content: vec![Inline::text(text)],
            href: href.into(),
        }
    }

    /// Raw text of this run, without any markup
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text { text, .. } => text.clone(),
            Inline::Link { content, .. } => inlines_plain_text(content),
        }
    }
}

/// Concatenated raw text of a run sequence
pub fn inlines_plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_only_for_list_items() {
        let child = Block::Paragraph(vec![Inline::text("sub")]);
        let item = Block::BulletListItem {
            content: vec![Inline::text("item")],
            children: vec![child.clone()],
        };
        assert_eq!(item.children(), &[child]);

        let quote = Block::Quote(vec![Inline::text("q")]);
        assert!(quote.children().is_empty());
    }

    #[test]
    fn test_plain_text_ignores_styles_and_links() {
        let inlines = vec![
            Inline::styled("bold", Styles::bold()),
            Inline::text(" and "),
            Inline::link("site", "https://example.com"),
        ];
        assert_eq!(inlines_plain_text(&inlines), "bold and site");
    }
}
