//! Rule system for custom block kinds.

mod rule;

pub use rule::{Filter, Rule};

use indexmap::IndexMap;

use crate::block::EditorBlock;

/// Collection of custom rendering rules, checked in insertion order
#[derive(Default)]
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule under `key`, replacing any rule already stored there
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.rules.insert(key.to_string(), rule);
    }

    /// Remove the rule stored under `key`
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.rules.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Find the first rule whose filter matches the block
    pub fn for_block(&self, block: &EditorBlock) -> Option<&Rule> {
        self.rules.values().find(|rule| rule.filter.matches(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmark_core::Options;

    fn render(rules: &Rules, block: &EditorBlock) -> Option<String> {
        rules
            .for_block(block)
            .map(|rule| rule.replace(block, "", &Options::default()))
    }

    #[test]
    fn test_first_match_wins() {
        let mut rules = Rules::new();
        rules.add("first", Rule::for_kind("video", |_, _, _| "first".to_string()));
        rules.add("second", Rule::for_kind("video", |_, _, _| "second".to_string()));
        assert_eq!(render(&rules, &EditorBlock::new("video")).as_deref(), Some("first"));
    }

    #[test]
    fn test_same_key_replaces_in_place() {
        let mut rules = Rules::new();
        rules.add("video", Rule::for_kind("video", |_, _, _| "old".to_string()));
        rules.add("other", Rule::for_kind("video", |_, _, _| "other".to_string()));
        rules.add("video", Rule::for_kind("video", |_, _, _| "new".to_string()));
        assert_eq!(rules.len(), 2);
        assert_eq!(render(&rules, &EditorBlock::new("video")).as_deref(), Some("new"));
    }

    #[test]
    fn test_remove() {
        let mut rules = Rules::new();
        rules.add("video", Rule::for_kind("video", |_, _, _| String::new()));
        assert!(rules.remove("video").is_some());
        assert!(rules.is_empty());
        assert!(rules.for_block(&EditorBlock::new("video")).is_none());
    }
}
