use crate::callout;

use super::kinds::{
    BlockQuote, BoldLine, CalloutFence, CodeFence, FenceKind, Heading, Image, ListKind,
    ListMarker, Meta, PipeTable, Rule,
};

/// What a single line could open, judged without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Rule,
    Heading,
    CalloutOpen,
    CalloutClose,
    Quote,
    CodeFence(FenceKind),
    Pipe,
    Image,
    EmojiShortcut,
    Bullet,
    Numbered,
    BoldLine,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently.
/// The hero-region flag is the only context the parser adds on top, through
/// [`LineClass::is_meta`] and [`LineClass::starts_block`].
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The raw line, without its terminator.
    pub text: &'a str,
    pub kind: LineKind,
}

impl LineClass<'_> {
    /// Whether the line is hero metadata, given whether the hero region is open.
    pub fn is_meta(&self, in_hero: bool) -> bool {
        in_hero
            && matches!(
                self.kind,
                LineKind::Heading
                    | LineKind::BoldLine
                    | LineKind::EmojiShortcut
                    | LineKind::Bullet
                    | LineKind::Numbered
                    | LineKind::Text
            )
            && Meta::matches(self.text)
    }

    /// Whether this line ends a running paragraph.
    pub fn starts_block(&self, in_hero: bool) -> bool {
        if self.is_meta(in_hero) {
            return true;
        }
        match self.kind {
            LineKind::Text => false,
            LineKind::BoldLine => in_hero,
            _ => true,
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Checks run from the most to the least specific syntax, so `---` is a rule
    /// rather than a list item and `**bold**` is never a bullet.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let t = line.trim();
        let kind = if t.is_empty() {
            LineKind::Blank
        } else if Rule::matches(t) {
            LineKind::Rule
        } else if Heading::depth(t).is_some() {
            LineKind::Heading
        } else if CalloutFence::is_close(t) {
            LineKind::CalloutClose
        } else if CalloutFence::open(t).is_some() {
            LineKind::CalloutOpen
        } else if BlockQuote::is_quote_line(t) {
            LineKind::Quote
        } else if let Some(kind) = CodeFence::sig(t) {
            LineKind::CodeFence(kind)
        } else if PipeTable::is_row(t) {
            LineKind::Pipe
        } else if Image::parse(t).is_some() {
            LineKind::Image
        } else if callout::emoji_shortcut(t).is_some() {
            LineKind::EmojiShortcut
        } else if let Some((list, _)) = ListMarker::parse(t) {
            match list {
                ListKind::Bullet => LineKind::Bullet,
                ListKind::Numbered => LineKind::Numbered,
            }
        } else if BoldLine::inner(t).is_some() {
            LineKind::BoldLine
        } else {
            LineKind::Text
        };

        LineClass { text: line, kind }
    }
}
