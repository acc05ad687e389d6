//! Custom renderings for block kinds the serializer has no syntax for.

use blockmark_core::Options;

use crate::block::EditorBlock;

/// Renders a matched block from the block, its rendered runs and the options
pub type ReplacementFn = Box<dyn Fn(&EditorBlock, &str, &Options) -> String + Send + Sync>;

/// Selects the editor blocks a rule takes over
pub enum Filter {
    /// Exactly this `type`
    Kind(String),
    /// Any of these `type`s
    Kinds(Vec<String>),
    /// Arbitrary test on the block, e.g. on its props
    Predicate(Box<dyn Fn(&EditorBlock) -> bool + Send + Sync>),
}

impl Filter {
    pub fn kind(name: &str) -> Self {
        Filter::Kind(name.to_string())
    }

    pub fn kinds(names: &[&str]) -> Self {
        Filter::Kinds(names.iter().map(|s| s.to_string()).collect())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&EditorBlock) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Kinds are compared case-sensitively, as editors emit camelCase names.
    pub fn matches(&self, block: &EditorBlock) -> bool {
        match self {
            Filter::Kind(kind) => block.kind == *kind,
            Filter::Kinds(kinds) => kinds.iter().any(|k| *k == block.kind),
            Filter::Predicate(f) => f(block),
        }
    }
}

/// A filter paired with the Markdown it produces for matching blocks
pub struct Rule {
    pub filter: Filter,
    pub replacement: ReplacementFn,
}

impl Rule {
    /// The replacement's output is emitted verbatim in place of the block;
    /// list children of a matched block are not rendered.
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&EditorBlock, &str, &Options) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    pub fn for_kind<F>(kind: &str, replacement: F) -> Self
    where
        F: Fn(&EditorBlock, &str, &Options) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kind(kind), replacement)
    }

    pub fn for_kinds<F>(kinds: &[&str], replacement: F) -> Self
    where
        F: Fn(&EditorBlock, &str, &Options) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kinds(kinds), replacement)
    }

    /// Render `block`; `content` is its inline runs already in Markdown
    pub fn replace(&self, block: &EditorBlock, content: &str, options: &Options) -> String {
        (self.replacement)(block, content, options)
    }
}
