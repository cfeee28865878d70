pub mod blocks;
pub mod cursor;

#[cfg(test)]
mod tests;

use crate::{normalize::normalize, types::ContentBlock};

use blocks::BlockParser;

/// Parses already-normalized module text into blocks.
///
/// Total: every input yields a (possibly empty) block list.
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    BlockParser::new(text).parse()
}

/// Normalizes raw module text and parses it.
pub fn parse_document(raw: &str) -> Vec<ContentBlock> {
    parse_blocks(&normalize(raw))
}
