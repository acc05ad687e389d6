//! MarkdownService - the main entry point for block to Markdown conversion.

use blockmark_core::Options;
use serde_json::Value;

use crate::block::{blocks_from_value, EditorBlock};
use crate::convert::convert;
use crate::rules::{Rule, Rules};
use crate::text;
use crate::Result;

/// The main service for converting editor blocks to Markdown
#[derive(Default)]
pub struct MarkdownService {
    options: Options,
    rules: Rules,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert editor blocks to Markdown
    pub fn serialize(&self, blocks: &[EditorBlock]) -> String {
        // Convert editor blocks to the typed tree
        let tree = convert(blocks, &self.options, &self.rules);

        // Serialize tree to string
        blockmark_core::serialize(&tree, &self.options)
    }

    /// Convert a JSON value to Markdown; anything but an array yields `""`
    pub fn serialize_value(&self, value: &Value) -> String {
        self.serialize(&blocks_from_value(value))
    }

    /// Convert JSON text to Markdown
    pub fn serialize_json(&self, json: &str) -> Result<String> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.serialize_value(&value))
    }

    /// Plain text of the blocks, one line per block
    pub fn plain_text(&self, blocks: &[EditorBlock]) -> String {
        text::plain_text(blocks)
    }

    /// Plain text cut to at most `max_chars` characters
    pub fn excerpt(&self, blocks: &[EditorBlock], max_chars: usize) -> String {
        text::excerpt(blocks, max_chars)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove a custom rule
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.rules.remove(key);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }
}
