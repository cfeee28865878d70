//! # Callout classification
//!
//! Rule tables the block parser consults to decide which kind of highlighted box
//! a construct becomes:
//!
//! - [`alias`] maps `:::name` fence names (including legacy spellings) onto the
//!   canonical [`BlockType`].
//! - [`classify_insight`] maps the heading of a `> ### ...` insight card onto a
//!   callout type by keyword or emoji.
//! - [`emoji_shortcut`] recognises single-line `💡 text` style callouts.
//! - [`classify_quote`] picks the reading of a blockquote run.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::BlockType;

/// Maps a callout fence name onto its block type.
///
/// Unknown names fall back to a generic [`BlockType::Callout`].
pub fn alias(name: &str) -> BlockType {
    match name.trim().to_lowercase().as_str() {
        "didyouknow" => BlockType::Didyouknow,
        "tip" => BlockType::Tip,
        "warning" => BlockType::Warning,
        "example" => BlockType::Example,
        "exercise" => BlockType::Exercise,
        "note" | "info" => BlockType::Callout,
        "important" | "keyconcept" | "key-concept" => BlockType::KeyConcept,
        "summary" => BlockType::Summary,
        _ => BlockType::Callout,
    }
}

/// Insight-card heading rules, checked in order; the first match wins.
static INSIGHT_RULES: LazyLock<Vec<(BlockType, Regex)>> = LazyLock::new(|| {
    [
        (
            BlockType::Warning,
            r"(?i)⚠|🔴|🚨|\b(?:warning|advertencia|cuidado|atenci[oó]n|pitfall|common mistake|error com[uú]n)\b",
        ),
        (
            BlockType::Didyouknow,
            r"(?i)💡|\b(?:insight|ideas?|did you know|sab[ií]as)\b",
        ),
        (BlockType::Tip, r"(?i)✅|💚|\b(?:tips?|consejos?)\b"),
        (
            BlockType::KeyConcept,
            r"(?i)🎯|📌|\b(?:key concepts?|conceptos? clave)\b",
        ),
        (
            BlockType::Exercise,
            r"(?i)✏|📝|\b(?:exercises?|ejercicios?|pr[aá]ctica|try it)\b",
        ),
    ]
    .into_iter()
    .map(|(ty, pattern)| (ty, Regex::new(pattern).expect("insight pattern is valid")))
    .collect()
});

/// Classifies the heading text of an insight card.
pub fn classify_insight(title: &str) -> BlockType {
    INSIGHT_RULES
        .iter()
        .find(|(_, re)| re.is_match(title))
        .map(|(ty, _)| *ty)
        .unwrap_or(BlockType::Callout)
}

/// Leading emoji of single-line callouts and the type each one produces.
const EMOJI_SHORTCUTS: &[(&str, BlockType)] = &[
    ("💡", BlockType::Didyouknow),
    ("⚠", BlockType::Warning),
    ("🔴", BlockType::Warning),
    ("✅", BlockType::Tip),
    ("💚", BlockType::Tip),
    ("🎯", BlockType::KeyConcept),
    ("📌", BlockType::MarginalNote),
];

/// Recognises an emoji-prefixed single-line callout.
///
/// Returns the callout type and the text after the emoji (and any variation
/// selector), trimmed.
pub fn emoji_shortcut(line: &str) -> Option<(BlockType, &str)> {
    let line = line.trim();
    EMOJI_SHORTCUTS.iter().find_map(|(emoji, ty)| {
        let rest = line.strip_prefix(emoji)?;
        let rest = rest.strip_prefix('\u{FE0F}').unwrap_or(rest);
        Some((*ty, rest.trim()))
    })
}

/// Formats a titled callout body.
pub fn titled(title: &str, body: &str) -> String {
    format!("**{title}**\n\n{body}")
}

static INSIGHT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s*(.+)$").expect("insight heading pattern is valid"));

/// Extracts the heading of an insight card (`### Title`) from a quote's first line.
pub fn insight_title(first_line: &str) -> Option<&str> {
    let caps = INSIGHT_HEADING.captures(first_line.trim())?;
    let title = caps.get(1)?.as_str().trim_start_matches('#').trim();
    (!title.is_empty()).then_some(title)
}

/// Whether a quote's first line opens a pull-quote (`## text`).
pub fn is_pull_quote(first_line: &str) -> bool {
    let line = first_line.trim();
    line.starts_with("##") && !line.starts_with("###")
}

/// The reading chosen for a blockquote run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteShape {
    /// `> ## text`: a pull-quote.
    PullQuote,
    /// Any quote inside the hero region: the module standfirst.
    Standfirst,
    /// `> ### Heading` followed by body lines.
    InsightCard,
    /// Everything else.
    Generic,
}

/// Chooses how a blockquote whose first line is `first_line` is read.
///
/// Precedence is pull-quote, hero standfirst, insight card, generic callout.
/// Quotes that fit more than one reading are logged, since that precedence
/// decides between them.
pub fn classify_quote(first_line: &str, in_hero: bool) -> QuoteShape {
    let candidates: Vec<QuoteShape> = [
        (is_pull_quote(first_line), QuoteShape::PullQuote),
        (in_hero, QuoteShape::Standfirst),
        (insight_title(first_line).is_some(), QuoteShape::InsightCard),
    ]
    .into_iter()
    .filter_map(|(hit, shape)| hit.then_some(shape))
    .collect();

    let Some(&chosen) = candidates.first() else {
        return QuoteShape::Generic;
    };
    if candidates.len() > 1 {
        log::info!(
            "ambiguous blockquote {first_line:?}: matches {candidates:?}, reading it as {chosen:?}"
        );
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("didyouknow", BlockType::Didyouknow)]
    #[case("tip", BlockType::Tip)]
    #[case("warning", BlockType::Warning)]
    #[case("example", BlockType::Example)]
    #[case("exercise", BlockType::Exercise)]
    #[case("note", BlockType::Callout)]
    #[case("info", BlockType::Callout)]
    #[case("important", BlockType::KeyConcept)]
    #[case("keyconcept", BlockType::KeyConcept)]
    #[case("key-concept", BlockType::KeyConcept)]
    #[case("summary", BlockType::Summary)]
    #[case("Warning", BlockType::Warning)]
    #[case("quiz", BlockType::Callout)]
    #[case("", BlockType::Callout)]
    fn alias_table(#[case] name: &str, #[case] expected: BlockType) {
        assert_eq!(alias(name), expected);
    }

    #[rstest]
    #[case("⚠️ Common mistake", BlockType::Warning)]
    #[case("Cuidado con los datos", BlockType::Warning)]
    #[case("💡 Insight", BlockType::Didyouknow)]
    #[case("Key idea", BlockType::Didyouknow)]
    #[case("¿Sabías que...?", BlockType::Didyouknow)]
    #[case("Pro tip", BlockType::Tip)]
    #[case("Consejo práctico", BlockType::Tip)]
    #[case("Key concept: entropy", BlockType::KeyConcept)]
    #[case("🎯 Objetivo", BlockType::KeyConcept)]
    #[case("Exercise 1", BlockType::Exercise)]
    #[case("Ejercicio", BlockType::Exercise)]
    #[case("Multiple choices", BlockType::Callout)]
    #[case("Background", BlockType::Callout)]
    fn insight_keywords(#[case] title: &str, #[case] expected: BlockType) {
        assert_eq!(classify_insight(title), expected);
    }

    #[test]
    fn warning_wins_over_later_rules() {
        assert_eq!(classify_insight("Warning: a tip"), BlockType::Warning);
    }

    #[rstest]
    #[case("💡 Neurons fire together", BlockType::Didyouknow, "Neurons fire together")]
    #[case("⚠️ Mind the gap", BlockType::Warning, "Mind the gap")]
    #[case("⚠ Mind the gap", BlockType::Warning, "Mind the gap")]
    #[case("🔴 Stop", BlockType::Warning, "Stop")]
    #[case("✅ Do this", BlockType::Tip, "Do this")]
    #[case("💚 Healthy habit", BlockType::Tip, "Healthy habit")]
    #[case("🎯 Goal", BlockType::KeyConcept, "Goal")]
    #[case("📌 Aside", BlockType::MarginalNote, "Aside")]
    fn emoji_shortcuts(#[case] line: &str, #[case] ty: BlockType, #[case] rest: &str) {
        assert_eq!(emoji_shortcut(line), Some((ty, rest)));
    }

    #[test]
    fn non_emoji_line_is_not_a_shortcut() {
        assert_eq!(emoji_shortcut("Plain text 💡"), None);
    }

    #[test]
    fn insight_title_extraction() {
        assert_eq!(insight_title("### 💡 Idea"), Some("💡 Idea"));
        assert_eq!(insight_title("###Tight"), Some("Tight"));
        assert_eq!(insight_title("#### Deeper"), Some("Deeper"));
        assert_eq!(insight_title("###   "), None);
        assert_eq!(insight_title("## Pull"), None);
    }

    #[test]
    fn pull_quote_detection() {
        assert!(is_pull_quote("## Big words"));
        assert!(is_pull_quote("##Big words"));
        assert!(!is_pull_quote("### Card"));
        assert!(!is_pull_quote("# One"));
    }

    #[rstest]
    #[case("## Quote", true, QuoteShape::PullQuote)]
    #[case("## Quote", false, QuoteShape::PullQuote)]
    #[case("Lead text", true, QuoteShape::Standfirst)]
    #[case("### Tip", true, QuoteShape::Standfirst)]
    #[case("### Tip", false, QuoteShape::InsightCard)]
    #[case("Plain", false, QuoteShape::Generic)]
    fn quote_shape_precedence(
        #[case] first: &str,
        #[case] in_hero: bool,
        #[case] expected: QuoteShape,
    ) {
        assert_eq!(classify_quote(first, in_hero), expected);
    }

    #[test]
    fn titled_format() {
        assert_eq!(titled("Heads up", "Body"), "**Heads up**\n\nBody");
    }
}
