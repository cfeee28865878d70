/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are the fallback for every line that
/// opens no other block, so unrecognised input is kept as text rather than lost.
pub struct Paragraph;

impl Paragraph {
    /// Joins the lines of a paragraph run with single spaces.
    pub fn join(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
