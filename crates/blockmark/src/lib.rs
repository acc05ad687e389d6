//! # blockmark
//!
//! Convert block editor documents to Markdown.
//!
//! Block-based rich text editors store a document as a JSON tree of blocks
//! (headings, paragraphs, list items, images...) whose text is a list of styled
//! runs. This crate reads that tree and renders it as Markdown, keeping list
//! nesting, inline styles and per-kind syntax.
//!
//! ## Design
//!
//! - **Total rendering**: unknown block kinds, missing or `null` fields and
//!   stray non-block entries fall back to documented defaults; only JSON that
//!   does not parse is an error.
//! - **No escaping**: run text is emitted as written.
//! - **Lossless input model**: [`EditorBlock`] keeps ids and unknown props, so
//!   documents can be read and written back unchanged.
//!
//! ## Example
//!
//! ```rust
//! use blockmark::{EditorBlock, InlineContent, MarkdownService};
//!
//! let service = MarkdownService::new();
//!
//! let blocks = vec![
//!     EditorBlock::new("heading").with_prop("level", 2).with_text("Title"),
//!     EditorBlock::new("checkListItem")
//!         .with_prop("checked", true)
//!         .with_text("parent")
//!         .with_child(EditorBlock::new("bulletListItem").with_text("sub")),
//!     EditorBlock::new("paragraph")
//!         .with_content(InlineContent::text("x").with_style("bold").with_style("italic")),
//! ];
//!
//! let markdown = service.serialize(&blocks);
//! assert_eq!(markdown, "## Title\n\n- [x] parent\n  - sub\n\n***x***");
//! ```

mod block;
mod convert;
mod rules;
mod service;
mod text;

pub use block::{
    blocks_from_value, blocks_to_json, parse_blocks, EditorBlock, InlineContent, Props, StyleMap,
};
pub use blockmark_core::{Block, Inline, Options, Styles};
pub use rules::{Filter, Rule, Rules};
pub use service::MarkdownService;
pub use text::{excerpt, plain_text};

/// Error type for blockmark operations
#[derive(Debug, thiserror::Error)]
pub enum BlockmarkError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlockmarkError>;

/// Render editor blocks to Markdown with default options
pub fn blocks_to_markdown(blocks: &[EditorBlock]) -> String {
    MarkdownService::new().serialize(blocks)
}
