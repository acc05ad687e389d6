//! Configuration options for Markdown serialization

/// Options for Markdown serialization
///
/// The defaults produce the canonical output: `-` bullets, `**` bold, `*`
/// italic, `~~` strike, triple-backtick fences and two-space child indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fence string for code blocks
    pub fence: String,

    /// Bullet marker for bullet and check list items
    pub bullet_list_marker: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strikethrough delimiter
    pub strike_delimiter: String,

    /// Prefix added to every line of nested list content
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fence: "```".to_string(),
            bullet_list_marker: '-',
            strong_delimiter: "**".to_string(),
            em_delimiter: '*',
            strike_delimiter: "~~".to_string(),
            indent: "  ".to_string(),
        }
    }
}
