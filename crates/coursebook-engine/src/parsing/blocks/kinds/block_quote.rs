/// Blockquote syntax: `>`-prefixed runs of lines.
///
/// All blockquote delimiter knowledge lives here; the reading of a run (pull
/// quote, standfirst, insight card or callout) is decided by
/// [`crate::callout::classify_quote`].
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether a line belongs to a blockquote run.
    pub fn is_quote_line(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Returns the text of each line with every quote level removed.
    ///
    /// Nested quotes are flattened into their parent. Leading and trailing
    /// empty lines are dropped; interior empty lines are kept as `""`.
    pub fn inner_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
        let mut inner: Vec<&'a str> = lines
            .iter()
            .map(|line| {
                let (_, idx) = Self::strip_prefixes(line);
                line[idx..].trim_end()
            })
            .collect();

        while inner.last().is_some_and(|l| l.trim().is_empty()) {
            inner.pop();
        }
        let leading = inner.iter().take_while(|l| l.trim().is_empty()).count();
        inner.drain(..leading);
        inner
    }
}
