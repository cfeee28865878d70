//! Constructs that only have meaning in the hero region, the lead zone before the
//! first horizontal rule: metadata lines and legacy bold standfirsts.

use std::sync::LazyLock;

use regex::Regex;

use super::ListMarker;

static META_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)⏱|⏰|🕐|📊|📈|🏷|🎓|\b(?:\d+\s*(?:mins?|h|hrs?)|min|mins|minutes?|minutos?|horas?|hours?|lectura|reading|level|nivel|beginner|intermediate|advanced|principiante|b[aá]sico|intermedio|avanzado|tags?|etiquetas?|category|categor[ií]a|duration|duraci[oó]n)\b",
    )
    .expect("meta keyword pattern is valid")
});

/// The horizontal rule that closes the hero region.
pub struct Rule;

impl Rule {
    /// `---`, `----`, ... with nothing else on the line.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 3 && t.bytes().all(|b| b == b'-')
    }
}

/// Hero metadata lines such as `⏱ 12 min | Level: beginner | #ai`.
pub struct Meta;

impl Meta {
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        !t.starts_with('|') && t.contains('|') && META_KEYWORD.is_match(t)
    }

    /// Metadata text with a list marker and surrounding emphasis removed.
    pub fn text(line: &str) -> &str {
        ListMarker::parse(line)
            .map_or(line, |(_, item)| item)
            .trim()
            .trim_start_matches(['*', '_'])
            .trim_end_matches(['*', '_'])
            .trim()
    }
}

/// A line that is bold from end to end: `**text**`.
pub struct BoldLine;

impl BoldLine {
    pub const DELIMITER: &'static str = "**";

    /// Inner text of a single bold span covering the whole line.
    pub fn inner(line: &str) -> Option<&str> {
        let inner = line
            .trim()
            .strip_prefix(Self::DELIMITER)?
            .strip_suffix(Self::DELIMITER)?;
        let inner = inner.trim();
        (!inner.is_empty() && !inner.contains(Self::DELIMITER)).then_some(inner)
    }
}
