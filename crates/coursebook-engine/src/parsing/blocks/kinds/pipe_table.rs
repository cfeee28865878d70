use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").expect("separator pattern is valid"));

/// Pipe tables, and the three-line single-cell variant used as a sidebar box.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';

    pub fn is_row(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    /// Trimmed cell texts of a row, without the outer pipes.
    pub fn cells(row: &str) -> Vec<&str> {
        let t = row.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }

    /// A `| --- | :---: |` header separator row.
    pub fn is_separator(row: &str) -> bool {
        let cells = Self::cells(row);
        !cells.is_empty() && cells.iter().all(|c| SEPARATOR_CELL.is_match(c))
    }

    /// The (title, body) of a sidebar box: exactly three rows, a single cell in
    /// the first and third, and a separator in between.
    pub fn sidebar<'a>(rows: &[&'a str]) -> Option<(&'a str, &'a str)> {
        let &[first, separator, third] = rows else {
            return None;
        };
        if !Self::is_separator(separator) {
            return None;
        }
        match (Self::cells(first).as_slice(), Self::cells(third).as_slice()) {
            ([title], [body]) => Some((*title, *body)),
            _ => None,
        }
    }
}
