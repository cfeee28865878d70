use std::sync::LazyLock;

use regex::Regex;

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^!\[([^\]]*)\](?:\(\s*([^)\s]*)(?:\s+"[^"]*")?\s*\))?\s*$"#)
        .expect("image pattern is valid")
});

static DESIGN_PROMPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:diseño|diseno|design)\s*:\s*(.*)$")
        .expect("design prompt pattern is valid")
});

/// An image line recognised by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLine<'a> {
    /// `![DISEÑO: prompt]`: an editorial note describing an image still to be made.
    Placeholder { prompt: &'a str },
    /// `![alt](src)`: an image that already exists.
    Picture { alt: &'a str, src: &'a str },
}

pub struct Image;

impl Image {
    /// Parses a whole-line image. Bare `![text]` without a design prefix or a
    /// source is not an image and stays paragraph text.
    pub fn parse(line: &str) -> Option<ImageLine<'_>> {
        let caps = IMAGE.captures(line.trim())?;
        let alt = caps.get(1)?.as_str();
        if let Some(prompt) = DESIGN_PROMPT.captures(alt).and_then(|c| c.get(1)) {
            return Some(ImageLine::Placeholder {
                prompt: prompt.as_str().trim(),
            });
        }
        let src = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty())?;
        Some(ImageLine::Picture {
            alt: alt.trim(),
            src,
        })
    }
}
