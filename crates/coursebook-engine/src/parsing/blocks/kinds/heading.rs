use crate::types::BlockType;

/// ATX headings. Depths of four or more fold into `heading3`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Number of leading `#` characters, if the line starts with one.
    pub fn depth(line: &str) -> Option<usize> {
        let t = line.trim_start();
        let depth = t.chars().take_while(|&c| c == Self::MARKER).count();
        (depth > 0).then_some(depth)
    }

    /// Block type and text of a heading line. A missing space after the
    /// marker is tolerated. The text may be empty (`#` on its own).
    ///
    /// A closing `#` run is dropped only when whitespace separates it from the
    /// text, so `## Learning C#` keeps its last character.
    pub fn parse(line: &str) -> Option<(BlockType, &str)> {
        let depth = Self::depth(line)?;
        let ty = match depth {
            1 => BlockType::Heading1,
            2 => BlockType::Heading2,
            _ => BlockType::Heading3,
        };
        let body = line.trim().trim_start_matches(Self::MARKER).trim();
        let text = match body.trim_end_matches(Self::MARKER) {
            "" => "",
            rest if rest.ends_with(char::is_whitespace) => rest.trim_end(),
            _ => body,
        };
        Some((ty, text))
    }
}
