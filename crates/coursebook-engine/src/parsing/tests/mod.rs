//! Whole-document tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; smaller shapes are pinned with inline
//! `insta` snapshots.

use pretty_assertions::assert_eq;

use crate::{
    parsing::{parse_blocks, parse_document},
    types::{BlockType, ContentBlock},
};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

/// One line per block: `type: content`, with list items appended.
fn outline(blocks: &[ContentBlock]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| match &b.items {
            Some(items) => format!("{}: {}", b.block_type, items.join(" / ")),
            None => format!("{}: {}", b.block_type, b.content),
        })
        .collect()
}

#[test]
fn fixture_neural_networks_module() {
    let blocks = parse_document(&fixture("neural_networks"));

    assert_eq!(
        blocks,
        vec![
            ContentBlock::new(BlockType::Heading1, "How Neural Networks Learn"),
            ContentBlock::new(
                BlockType::Standfirst,
                "A gentle tour of gradients, weights and the loop that ties them together."
            ),
            ContentBlock::new(BlockType::Meta, "⏱ 12 min | 📊 Beginner | 🏷 AI"),
            ContentBlock::new(BlockType::Heading2, "The core idea"),
            ContentBlock::new(
                BlockType::Paragraph,
                "A neural network is a stack of simple functions. Each one nudges numbers a little."
            ),
            ContentBlock::new(
                BlockType::KeyConcept,
                "**Remember**\n\nLearning means adjusting weights to reduce error."
            ),
            ContentBlock::new(BlockType::Quote, "Every expert was once a beginner.")
                .with_source("Helen Hayes"),
            ContentBlock::new(BlockType::Heading3, "Step by step"),
            ContentBlock::list(
                BlockType::NumberedList,
                vec![
                    "Make a prediction".into(),
                    "Measure the error".into(),
                    "Adjust the weights".into(),
                ]
            ),
            ContentBlock::new(
                BlockType::Didyouknow,
                "**💡 Insight**\n\nGradients point uphill, so we step the other way."
            ),
            ContentBlock::new(
                BlockType::Callout,
                "**⚠️ WATCH OUT**\n\nToo large a learning rate makes training diverge."
            ),
            ContentBlock::new(BlockType::Code, "weights -= learning_rate * gradient")
                .with_caption("python"),
            ContentBlock::new(BlockType::Callout, "A ball rolling down a valley of error"),
            ContentBlock::list(
                BlockType::List,
                vec!["Loss".into(), "Gradient".into(), "Epoch".into()]
            ),
            ContentBlock::new(
                BlockType::Table,
                "| Term | Meaning |\n| --- | --- |\n| Epoch | One full pass |"
            ),
            ContentBlock::new(BlockType::Tip, "Start with a small learning rate."),
        ]
    );
}

#[test]
fn legacy_html_module_shape() {
    let raw = "# Legacy\n\n**An old bold lead**\n\n---\n\n<p>Body <b>text</b> here.</p>\n\n\n\n<div style=\"border: 2px solid #f90\"><b>Did you know?</b><br>Honey never spoils.</div>\n\n## Next";
    insta::assert_debug_snapshot!(outline(&parse_document(raw)), @r#"
    [
        "heading1: Legacy",
        "standfirst: An old bold lead",
        "paragraph: Body text here.",
        "didyouknow: **Did you know?**\n\nHoney never spoils.",
        "heading2: Next",
    ]
    "#);
}

#[test]
fn dispatch_precedence_shape() {
    let text = "## Plan\n- a\n- b\n1. one\n```\ncode\n```\n| x |\n| --- |\n| y |\ntrailing words";
    insta::assert_debug_snapshot!(outline(&parse_blocks(text)), @r#"
    [
        "heading2: Plan",
        "list: a / b",
        "numbered-list: one",
        "code: code",
        "callout: **x**\n\ny",
        "paragraph: trailing words",
    ]
    "#);
}

#[test]
fn every_content_line_survives_parsing() {
    let text = "Intro words\n<span>x</span>\n#\n> \n:::\n|only|\nclosing words";
    let blocks = parse_blocks(text);
    let all: String = outline(&blocks).join("\n");
    assert!(all.contains("Intro words"));
    assert!(all.contains("closing words"));
}

#[test]
fn comparisons_survive_normalization() {
    let raw = "```c\nfor (i = 0; i < n; i++) {\n  if (a < b) x = 1;\n}\n```\n\nAfter the loop, x > 0.";
    assert_eq!(
        parse_document(raw),
        vec![
            ContentBlock::new(
                BlockType::Code,
                "for (i = 0; i < n; i++) {\n  if (a < b) x = 1;\n}"
            )
            .with_caption("c"),
            ContentBlock::new(BlockType::Paragraph, "After the loop, x > 0."),
        ]
    );
    assert_eq!(
        parse_document("If a < b and c > d then swap."),
        vec![ContentBlock::new(BlockType::Paragraph, "If a < b and c > d then swap.")]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let text = fixture("neural_networks");
    assert_eq!(parse_document(&text), parse_document(&text));
}
