use std::sync::LazyLock;

use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("bullet pattern is valid"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(.*)$").expect("numbered pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// List item markers: `- `, `* ` and `1. ` / `1) `.
pub struct ListMarker;

impl ListMarker {
    /// The list kind and item text of a marker line.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        let t = line.trim();
        if let Some(caps) = BULLET.captures(t) {
            return Some((ListKind::Bullet, caps.get(1)?.as_str().trim()));
        }
        let caps = NUMBERED.captures(t)?;
        Some((ListKind::Numbered, caps.get(1)?.as_str().trim()))
    }

    /// Whether a line is indented under a list item.
    pub fn is_indented(line: &str) -> bool {
        line.starts_with([' ', '\t']) && !line.trim().is_empty()
    }
}
