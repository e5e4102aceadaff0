use regex::Regex;
use std::collections::HashSet;

/// Extracts hashtags that are bounded by whitespace on both sides.
///
/// A candidate must be found both as a "space then tag" match and a "tag
/// then space" match; only candidates present in both sets count. A tag at
/// the very start or very end of the text has no bounding whitespace on one
/// side and is excluded.
pub struct TagExtractor {
    space_then_tag: Regex,
    tag_then_space: Regex,
}

impl TagExtractor {
    pub fn new() -> Self {
        Self {
            space_then_tag: Regex::new(r"\s#\w+").unwrap(),
            tag_then_space: Regex::new(r"#\w+\s").unwrap(),
        }
    }

    /// Distinct tags in the text, without the leading `#`.
    ///
    /// Set semantics: a tag repeated within one text is returned once, so
    /// each record contributes at most one occurrence per tag.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let with_space_before: HashSet<&str> = self
            .space_then_tag
            .find_iter(text)
            .filter_map(|m| m.as_str().trim_start().strip_prefix('#'))
            .collect();
        let with_space_after: HashSet<&str> = self
            .tag_then_space
            .find_iter(text)
            .filter_map(|m| m.as_str().trim_end().strip_prefix('#'))
            .collect();

        with_space_before
            .intersection(&with_space_after)
            .map(|tag| tag.to_string())
            .collect()
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}
