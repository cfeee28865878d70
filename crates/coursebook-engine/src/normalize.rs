//! Pre-parse cleanup of generated module text.
//!
//! Older generator runs emitted bordered HTML boxes and inline formatting tags.
//! Normalization rewrites the boxes into `:::didyouknow[Title]` fences, removes
//! the remaining inline tags and collapses runs of blank lines. Code fence
//! bodies are left as written. The output is a fixed point: normalizing it
//! again returns it unchanged, so stored text can go through the pipeline both
//! at generation time and at render time.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::blocks::kinds::{CodeFence, FenceKind};

static HTML_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<div\b[^<>]*style\s*=\s*["'][^"'<>]*border[^"'<>]*["'][^<>]*>\s*<(?:b|strong)>(.*?)</(?:b|strong)\s*>(.*?)</div\s*>"#,
    )
    .expect("html box pattern is valid")
});

static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)(div|span|b|i|em|strong|p|br)\b[^<>\n]*>")
        .expect("inline tag pattern is valid")
});

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Normalizes raw module text. Idempotent.
///
/// Stripping a tag can turn a line into a fence marker and change which
/// lines count as code, so passes repeat until the text stops changing.
/// A pass that changes anything removes a `<`, a `\r` or a newline.
pub fn normalize(raw: &str) -> String {
    let mut current = single_pass(raw);
    loop {
        let next = single_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn single_pass(raw: &str) -> String {
    let unix = raw.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned = outside_code_fences(&unix, |prose| {
        strip_inline_tags(&convert_html_boxes(prose))
    });
    EXCESS_NEWLINES.replace_all(&cleaned, "\n\n").into_owned()
}

/// Applies `clean` to each run of lines outside fenced code. Fence lines and
/// code bodies are copied through untouched. An unclosed fence runs to the end.
fn outside_code_fences(text: &str, clean: impl Fn(&str) -> String) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut fence: Option<FenceKind> = None;

    for line in text.split('\n') {
        match fence {
            Some(kind) => {
                out.push(line.to_string());
                if CodeFence::closes(kind, line) {
                    fence = None;
                }
            }
            None => match CodeFence::sig(line) {
                Some(kind) => {
                    if !prose.is_empty() {
                        out.push(clean(&prose.join("\n")));
                        prose.clear();
                    }
                    out.push(line.to_string());
                    fence = Some(kind);
                }
                None => prose.push(line),
            },
        }
    }
    if !prose.is_empty() {
        out.push(clean(&prose.join("\n")));
    }
    out.join("\n")
}

/// Rewrites `<div style="border..."><b>Title</b>body</div>` into a fenced callout.
fn convert_html_boxes(text: &str) -> String {
    HTML_BOX
        .replace_all(text, |caps: &Captures| {
            let title = strip_inline_tags(&caps[1]);
            let body = strip_inline_tags(&caps[2]);
            format!(
                "\n\n:::didyouknow[{}]\n{}\n:::\n\n",
                title.trim(),
                body.trim()
            )
        })
        .into_owned()
}

/// Removes inline formatting tags until none remain.
///
/// A single pass can expose a new tag (`<<b>b>`), so this loops to a fixed point.
/// Every pass removes at least one `<`, which bounds the loop.
fn strip_inline_tags(text: &str) -> String {
    let mut current = text.to_string();
    while INLINE_TAG.is_match(&current) {
        current = INLINE_TAG
            .replace_all(&current, |caps: &Captures| {
                let closing = !caps[1].is_empty();
                match caps[2].to_ascii_lowercase().as_str() {
                    "br" => "\n",
                    "p" if closing => "\n\n",
                    _ => "",
                }
            })
            .into_owned();
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn converts_bordered_box_into_didyouknow_fence() {
        let raw = "Intro\n<div style=\"border: 1px solid #ccc; padding: 8px\"><b>Fun fact</b><br>Octopuses have three hearts.</div>\nOutro";
        assert_eq!(
            normalize(raw),
            "Intro\n\n:::didyouknow[Fun fact]\nOctopuses have three hearts.\n:::\n\nOutro"
        );
    }

    #[test]
    fn box_with_strong_title_and_paragraph_body() {
        let raw = "<DIV STYLE='border-left:4px solid'><strong>Note</strong><p>Line one</p><p>Line two</p></DIV>";
        assert_eq!(
            normalize(raw),
            "\n\n:::didyouknow[Note]\nLine one\n\nLine two\n:::\n\n"
        );
    }

    #[test]
    fn div_without_border_is_only_stripped() {
        let raw = "<div class=\"x\"><b>Bold</b> text</div>";
        assert_eq!(normalize(raw), "Bold text");
    }

    #[test]
    fn strips_inline_tags_and_keeps_other_markup() {
        let raw = "<span>a</span> <em>b</em> <i>c</i> <blockquote>d</blockquote> <pre>e</pre>";
        assert_eq!(
            normalize(raw),
            "a b c <blockquote>d</blockquote> <pre>e</pre>"
        );
    }

    #[test]
    fn br_variants_become_newlines() {
        assert_eq!(normalize("one<br>two<br/>three<BR />four"), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(normalize("a\n\n\n\n\nb\n\n\nc\n\nd"), "a\n\nb\n\nc\n\nd");
    }

    #[test]
    fn converts_crlf() {
        assert_eq!(normalize("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn nested_tag_fragments_are_fully_removed() {
        assert_eq!(normalize("<<b>b>x"), "x");
    }

    #[test]
    fn lone_carriage_returns_become_newlines() {
        assert_eq!(normalize("a\r\r\n\nb"), "a\n\nb");
        assert_eq!(normalize("x\r<br>y"), "x\n\ny");
    }

    #[test]
    fn comparisons_in_prose_are_not_tags() {
        let text = "If a < b and c > d then swap.";
        assert_eq!(normalize(text), text);
        assert_eq!(normalize("x <b\ny> z"), "x <b\ny> z");
    }

    #[test]
    fn code_fence_bodies_are_left_alone() {
        let text = "<b>Before</b>\n```html\n<p>Hello <b>world</b></p>\n\n\n\nfor (i = 0; i < n; i++) {}\n```\n~~~\n<div style=\"border\"><b>T</b>x</div>\n~~~\n<i>After</i>";
        assert_eq!(
            normalize(text),
            "Before\n```html\n<p>Hello <b>world</b></p>\n\nfor (i = 0; i < n; i++) {}\n```\n~~~\n<div style=\"border\"><b>T</b>x</div>\n~~~\nAfter"
        );
    }

    #[test]
    fn unclosed_fence_runs_to_the_end() {
        let text = "<b>a</b>\n```\n<b>b</b>";
        assert_eq!(normalize(text), "a\n```\n<b>b</b>");
    }

    #[test]
    fn already_normalized_text_is_unchanged() {
        let text = "# Title\n\n> Lead\n\n:::tip[Hint]\nBody\n:::\n\n| a |\n| --- |\n| b |";
        assert_eq!(normalize(text), text);
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("a\n\n\n\nb")]
    #[case("<div style=\"border:1px\"><b>T</b>body</div>")]
    #[case("<div style=\"border:1px\"><b>T</b></div>")]
    #[case("<<b>b>\r<br>\n")]
    #[case("x\r<br>y")]
    #[case("<p>one</p>\n\n<p>two</p>\n\n\n")]
    #[case("<div style=\"border\"><b>A</b><div style=\"border\"><b>B</b>c</div></div>")]
    #[case("\n\n\n<span>\n\n</span>\n\n\n")]
    #[case(":::warning[x]\n<b>y</b>\n:::")]
    #[case("a\r\r\n\nb")]
    #[case("<b>```</b>\nA\n```\n<b>x</b>\n```")]
    #[case("x<br>```\n<i>y</i>")]
    #[case("```\nif (a < b) { x = 1; }\n```\n\nAfter, x > 0.")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}
