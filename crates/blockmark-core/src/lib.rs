//! blockmark-core - typed block tree and Markdown serialization
//!
//! This crate provides the block tree produced by a block-based rich text
//! editor, in typed form, and its serialization to Markdown. It is used by
//! `blockmark`, which reads the editor's JSON into these types.
//!
//! # Architecture
//!
//! ```text
//! Editor JSON ──blockmark──▶ ┌────────────┐
//!                            │            │
//!                            │ Block tree │ ──▶ Markdown String
//! Hand-built ───────────────▶│            │
//!                            └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockmark_core::{serialize, Block, Inline, Options, Styles};
//!
//! let blocks = vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::text("Hello World")],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::text("This is "),
//!         Inline::styled("bold", Styles::bold()),
//!         Inline::text(" text."),
//!     ]),
//! ];
//!
//! let markdown = serialize(&blocks, &Options::default());
//! assert_eq!(markdown, "# Hello World\n\nThis is **bold** text.");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{inlines_plain_text, Block, Inline, Styles};
pub use options::Options;
pub use serialize::{indent, render_block, render_inlines, serialize};
