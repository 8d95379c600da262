//! Tag extraction from note content.
//!
//! # Invariants
//! - A tag line is exactly `#` followed by non-whitespace, with no other `#`.
//! - Tags keep first-seen order and are deduplicated.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TAG_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(\S+)$").expect("valid tag line regex"));

/// Returns the tags declared on their own lines in `content`.
pub fn parse_tags(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .split('\n')
        .filter_map(|line| TAG_LINE_RE.captures(line))
        .filter_map(|caps| caps.get(1).map(|tag| tag.as_str()))
        .filter(|tag| !tag.contains('#'))
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}
