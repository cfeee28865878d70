use std::sync::LazyLock;

use regex::Regex;

static OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:::\s*([A-Za-z][\w-]*)\s*(?:\[(.*)\])?\s*$")
        .expect("callout fence pattern is valid")
});

/// The parts of a `:::name[title]` opener line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutOpen<'a> {
    pub name: &'a str,
    pub title: Option<&'a str>,
}

/// Custom `:::type[title] ... :::` callout fences.
pub struct CalloutFence;

impl CalloutFence {
    pub const DELIMITER: &'static str = ":::";

    /// Parses an opener line; `None` if the line is not one.
    pub fn open(line: &str) -> Option<CalloutOpen<'_>> {
        let caps = OPENER.captures(line.trim())?;
        let name = caps.get(1)?.as_str();
        let title = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|t| !t.is_empty());
        Some(CalloutOpen { name, title })
    }

    /// Whether the line is a bare closing fence.
    pub fn is_close(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }
}
