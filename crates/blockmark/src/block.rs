//! Editor-shaped block tree.
//!
//! These types mirror the JSON a block-based editor emits and stores, so a
//! document read with [`parse_blocks`] and written back with
//! [`blocks_to_json`] keeps its ids, props and style keys.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;

/// Block-kind specific attributes
pub type Props = IndexMap<String, Value>;

/// Style flags and values of an inline run
pub type StyleMap = IndexMap<String, Value>;

/// A block as produced by the editor.
///
/// Every field tolerates `null` or a value of the wrong shape and reads it as
/// its default, so a partial block never fails the whole document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorBlock {
    /// Opaque id, kept as written (string, number...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "or_default")]
    pub props: Props,

    #[serde(default, deserialize_with = "objects_or_empty")]
    pub content: Vec<InlineContent>,

    #[serde(default, deserialize_with = "objects_or_empty")]
    pub children: Vec<EditorBlock>,
}

impl EditorBlock {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.content.push(InlineContent::text(text));
        self
    }

    pub fn with_content(mut self, run: InlineContent) -> Self {
        self.content.push(run);
        self
    }

    pub fn with_child(mut self, child: EditorBlock) -> Self {
        self.children.push(child);
        self
    }

    /// A prop value, if present and not `null`
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key).filter(|v| !v.is_null())
    }

    /// A prop as a string slice, if it is a JSON string
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.prop(key).and_then(Value::as_str)
    }
}

/// A styled inline run as produced by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineContent {
    #[serde(
        rename = "type",
        default = "default_inline_kind",
        deserialize_with = "inline_kind"
    )]
    pub kind: String,

    #[serde(default, deserialize_with = "or_default")]
    pub text: String,

    #[serde(default, deserialize_with = "or_default")]
    pub styles: StyleMap,

    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub href: Option<String>,

    /// Nested runs of a link
    #[serde(
        default,
        deserialize_with = "objects_or_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<InlineContent>,
}

fn default_inline_kind() -> String {
    "text".to_string()
}

impl InlineContent {
    pub fn text(text: &str) -> Self {
        Self {
            kind: default_inline_kind(),
            text: text.to_string(),
            styles: StyleMap::new(),
            href: None,
            content: Vec::new(),
        }
    }

    pub fn link(text: &str, href: &str) -> Self {
        Self {
            kind: "link".to_string(),
            href: Some(href.to_string()),
            ..Self::text(text)
        }
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.styles.insert(style.to_string(), Value::Bool(true));
        self
    }

    pub fn is_link(&self) -> bool {
        self.kind == "link"
    }

    /// Whether a boolean style flag is set to `true`
    pub fn has_style(&self, style: &str) -> bool {
        matches!(self.styles.get(style), Some(Value::Bool(true)))
    }
}

/// `null` or a value of another shape reads as `T::default()`
fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_default())
}

fn inline_kind<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(kind) => Ok(kind),
        _ => Ok(default_inline_kind()),
    }
}

/// Array entries that are objects; anything else (`null`, maps, scalars) is empty
fn objects_or_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(read_objects(&items)),
        _ => Ok(Vec::new()),
    }
}

/// Read every object entry, skipping the rest
fn read_objects<T: DeserializeOwned>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(index, "skipped non-object entry");
                return None;
            }
            match T::deserialize(item) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipped unreadable entry");
                    None
                }
            }
        })
        .collect()
}

/// Read an editor document from JSON text.
///
/// A document that is not an array (including `null`) has no blocks.
pub fn parse_blocks(json: &str) -> Result<Vec<EditorBlock>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(blocks_from_value(&value))
}

/// Read an editor document from an already parsed JSON value.
///
/// Entries that are not objects are skipped.
pub fn blocks_from_value(value: &Value) -> Vec<EditorBlock> {
    match value {
        Value::Array(items) => read_objects(items),
        _ => Vec::new(),
    }
}

/// Write an editor document back to JSON text
pub fn blocks_to_json(blocks: &[EditorBlock]) -> Result<String> {
    Ok(serde_json::to_string(blocks)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockmarkError;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let blocks = blocks_from_value(&json!([{ "type": "paragraph" }]));
        assert_eq!(blocks, vec![EditorBlock::new("paragraph")]);
    }

    #[test]
    fn test_null_fields_default() {
        let blocks = blocks_from_value(&json!([{
            "id": null,
            "type": null,
            "props": null,
            "content": [{ "type": null, "text": null, "styles": null, "href": null }],
            "children": null
        }]));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, None);
        assert_eq!(blocks[0].kind, "");
        assert!(blocks[0].props.is_empty());
        assert_eq!(blocks[0].content, vec![InlineContent::text("")]);
    }

    #[test]
    fn test_wrong_shapes_default() {
        let blocks = blocks_from_value(&json!([{
            "type": "paragraph",
            "props": "level-2",
            "content": [{ "type": 3, "text": 42, "styles": [true], "href": false }]
        }]));
        assert!(blocks[0].props.is_empty());
        assert_eq!(blocks[0].content, vec![InlineContent::text("")]);
    }

    #[test]
    fn test_ids_are_opaque() {
        let blocks = blocks_from_value(&json!([
            { "id": 7, "type": "paragraph" },
            { "id": "b-2", "type": "paragraph" },
            { "id": { "page": 1, "n": 3 }, "type": "paragraph" }
        ]));
        assert_eq!(blocks[0].id, Some(json!(7)));
        assert_eq!(blocks[1].id, Some(json!("b-2")));
        assert_eq!(blocks[2].id, Some(json!({ "page": 1, "n": 3 })));

        let written: Value = serde_json::from_str(&blocks_to_json(&blocks).unwrap()).unwrap();
        assert_eq!(written[0]["id"], 7);
        assert_eq!(written[2]["id"]["n"], 3);
    }

    #[test]
    fn test_non_array_content_is_empty() {
        let value = json!([{
            "type": "table",
            "content": { "type": "tableContent", "rows": [] },
            "children": null
        }]);
        let blocks = blocks_from_value(&value);
        assert!(blocks[0].content.is_empty());
        assert!(blocks[0].children.is_empty());
    }

    #[test]
    fn test_non_array_document_is_empty() {
        assert!(blocks_from_value(&Value::Null).is_empty());
        assert!(blocks_from_value(&json!({ "type": "paragraph" })).is_empty());
        assert!(parse_blocks("\"text\"").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let blocks = blocks_from_value(&json!([
            { "type": "paragraph" },
            null,
            42,
            ["heading"],
            {
                "type": "bulletListItem",
                "content": [null, { "type": "text", "text": "kept" }, "loose"],
                "children": [false, { "type": "quote" }]
            }
        ]));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].content, vec![InlineContent::text("kept")]);
        assert_eq!(blocks[1].children, vec![EditorBlock::new("quote")]);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            parse_blocks("[{"),
            Err(BlockmarkError::Json(_))
        ));
    }

    #[test]
    fn test_style_flags_require_true() {
        let run: InlineContent = serde_json::from_value(json!({
            "type": "text",
            "text": "x",
            "styles": { "bold": true, "italic": "yes", "textColor": "red" }
        }))
        .unwrap();
        assert!(run.has_style("bold"));
        assert!(!run.has_style("italic"));
        assert!(!run.has_style("strike"));
    }

    #[test]
    fn test_round_trip_preserves_ids_and_unknown_keys() {
        let source = json!([{
            "id": "b-1",
            "type": "heading",
            "props": { "level": 2, "textAlignment": "left" },
            "content": [{
                "type": "text",
                "text": "Title",
                "styles": { "textColor": "blue", "bold": true }
            }],
            "children": [{ "id": "b-2", "type": "paragraph", "props": {}, "content": [], "children": [] }]
        }]);
        let blocks = parse_blocks(&source.to_string()).unwrap();
        let written: Value = serde_json::from_str(&blocks_to_json(&blocks).unwrap()).unwrap();

        assert_eq!(written[0]["id"], "b-1");
        assert_eq!(written[0]["children"][0]["id"], "b-2");
        assert_eq!(written[0]["props"], source[0]["props"]);
        assert_eq!(written[0]["content"][0]["styles"], source[0]["content"][0]["styles"]);
        assert_eq!(parse_blocks(&written.to_string()).unwrap(), blocks);
    }
}
