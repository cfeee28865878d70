//! Turns pages into styled terminal lines.

use coursebook_engine::{BlockType, ContentBlock, TableOfContentsItem, TextbookPage};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn page_lines(page: &TextbookPage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in &page.content {
        lines.extend(block_lines(block));
        lines.push(Line::default());
    }
    lines
}

pub fn block_lines(block: &ContentBlock) -> Vec<Line<'static>> {
    let text = block.content.as_str();
    match block.block_type {
        BlockType::Heading1 => vec![styled(
            text.to_uppercase(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )],
        BlockType::Heading2 => vec![styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )],
        BlockType::Heading3 => vec![styled(text, Style::default().add_modifier(Modifier::BOLD))],
        BlockType::Meta => vec![styled(text, Style::default().fg(Color::DarkGray))],
        BlockType::Standfirst => text_lines(text, Style::default().add_modifier(Modifier::ITALIC)),
        BlockType::Paragraph => text_lines(text, Style::default()),
        BlockType::Quote => {
            let mut lines = boxed(text, Color::Magenta, "“");
            if let Some(source) = &block.source {
                lines.push(styled(
                    format!("  — {source}"),
                    Style::default().fg(Color::Magenta),
                ));
            }
            lines
        }
        BlockType::List => block
            .items
            .iter()
            .flatten()
            .map(|item| Line::from(format!("  • {item}")))
            .collect(),
        BlockType::NumberedList => block
            .items
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, item)| Line::from(format!("  {}. {item}", i + 1)))
            .collect(),
        BlockType::Code => {
            let style = Style::default().fg(Color::Green);
            let mut lines = vec![styled(
                format!("```{}", block.caption.as_deref().unwrap_or_default()),
                style,
            )];
            lines.extend(text.lines().map(|line| styled(line.to_string(), style)));
            lines.push(styled("```", style));
            lines
        }
        BlockType::Table => text
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect(),
        BlockType::Figure => vec![styled(
            format!(
                "[figure {}: {}]",
                text,
                block.caption.as_deref().unwrap_or_default()
            ),
            Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
        )],
        BlockType::Callout
        | BlockType::Didyouknow
        | BlockType::Example
        | BlockType::Exercise
        | BlockType::MarginalNote
        | BlockType::KeyConcept
        | BlockType::Warning
        | BlockType::Tip
        | BlockType::Summary => {
            let mut lines = vec![styled(
                block.block_type.as_str().to_uppercase(),
                Style::default()
                    .fg(callout_color(block.block_type))
                    .add_modifier(Modifier::BOLD),
            )];
            lines.extend(boxed(text, callout_color(block.block_type), "│"));
            lines
        }
    }
}

pub fn toc_label(item: &TableOfContentsItem) -> String {
    let indent = "  ".repeat(usize::from(item.level.saturating_sub(1)));
    format!("{indent}{}  ·  p.{}", item.title, item.page)
}

fn callout_color(block_type: BlockType) -> Color {
    match block_type {
        BlockType::Warning => Color::Red,
        BlockType::Tip => Color::Green,
        BlockType::KeyConcept | BlockType::Summary => Color::Yellow,
        _ => Color::Blue,
    }
}

fn boxed(text: &str, color: Color, gutter: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| {
            let (body, style) = match bold_line(line) {
                Some(inner) => (inner, Style::default().add_modifier(Modifier::BOLD)),
                None => (line, Style::default()),
            };
            Line::from(vec![
                Span::styled(format!("{gutter} "), Style::default().fg(color)),
                Span::styled(body.to_string(), style),
            ])
        })
        .collect()
}

fn text_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.lines().map(|line| styled(line.to_string(), style)).collect()
}

fn styled(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.into(), style))
}

fn bold_line(line: &str) -> Option<&str> {
    line.strip_prefix("**")?.strip_suffix("**")
}
