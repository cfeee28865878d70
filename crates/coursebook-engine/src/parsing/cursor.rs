/// A forward-only cursor over the lines of a document.
///
/// Every dispatch rule of the block parser consumes input through this type, so
/// each rule can be exercised on its own with a hand-built cursor.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    /// Index of the next unconsumed line.
    i: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor positioned at the first line of `text`.
    ///
    /// Both `\n` and `\r\n` terminate a line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            i: 0,
        }
    }

    /// Zero-based index of the next unconsumed line.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true once every line has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.lines.len()
    }

    /// The next line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    /// The line `n` positions past the next one, without consuming anything.
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.i + n).copied()
    }

    /// Consumes and returns the next line.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.i += 1;
        Some(line)
    }

    /// Consumes lines for as long as `pred` holds, returning them in order.
    ///
    /// Stops at the first line that fails `pred` (leaving it unconsumed) or at EOF.
    pub fn take_while<F>(&mut self, mut pred: F) -> Vec<&'a str>
    where
        F: FnMut(&str) -> bool,
    {
        let mut taken = Vec::new();
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            taken.push(line);
            self.i += 1;
        }
        taken
    }
}
