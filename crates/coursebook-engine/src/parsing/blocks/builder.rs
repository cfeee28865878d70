use crate::{
    callout::{self, QuoteShape},
    parsing::cursor::LineCursor,
    types::{BlockType, ContentBlock},
};

use super::{
    classify::{LineClass, LineClassifier, LineKind},
    kinds::{
        BlockQuote, BoldLine, CalloutFence, CodeFence, FenceKind, Heading, Image, ImageLine,
        ListKind, ListMarker, Meta, Paragraph, PipeTable,
    },
};

/// Line-oriented state machine turning normalized text into content blocks.
///
/// Each step classifies the next line and dispatches to exactly one rule; every
/// rule consumes at least one line, so parsing always terminates. The only state
/// carried between rules is whether the hero region is still open.
pub struct BlockParser<'a> {
    cursor: LineCursor<'a>,
    classifier: LineClassifier,
    in_hero: bool,
    out: Vec<ContentBlock>,
}

impl<'a> BlockParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(text),
            classifier: LineClassifier,
            in_hero: true,
            out: vec![],
        }
    }

    pub fn parse(mut self) -> Vec<ContentBlock> {
        while let Some(line) = self.cursor.peek() {
            let class = self.classifier.classify(line);
            self.dispatch(class);
        }
        self.out
    }

    fn dispatch(&mut self, c: LineClass<'a>) {
        if c.is_meta(self.in_hero) {
            self.cursor.advance();
            self.emit(ContentBlock::new(BlockType::Meta, Meta::text(c.text)));
            return;
        }

        match c.kind {
            LineKind::Blank | LineKind::CalloutClose => {
                self.cursor.advance();
            }
            LineKind::Rule => {
                self.cursor.advance();
                self.in_hero = false;
            }
            LineKind::Heading => self.heading(c.text),
            LineKind::CalloutOpen => self.callout_fence(c.text),
            LineKind::Quote => self.block_quote(),
            LineKind::BoldLine if self.in_hero => self.bold_standfirst(c.text),
            LineKind::Image => self.image(c.text),
            LineKind::EmojiShortcut => self.emoji_shortcut(c.text),
            LineKind::Bullet => self.list(ListKind::Bullet),
            LineKind::Numbered => self.list(ListKind::Numbered),
            LineKind::CodeFence(kind) => self.code_fence(kind, c.text),
            LineKind::Pipe => self.pipe_table(),
            LineKind::BoldLine | LineKind::Text => self.paragraph(),
        }
    }

    fn emit(&mut self, block: ContentBlock) {
        self.out.push(block);
    }

    /// Emits a callout unless its body is empty.
    fn emit_callout(&mut self, ty: BlockType, title: Option<&str>, body: &str) {
        let body = body.trim();
        if body.is_empty() {
            log::debug!("suppressing {ty} callout with empty body (title {title:?})");
            return;
        }
        let content = match title {
            Some(title) => callout::titled(title, body),
            None => body.to_string(),
        };
        self.emit(ContentBlock::new(ty, content));
    }

    fn heading(&mut self, line: &str) {
        self.cursor.advance();
        if let Some((ty, text)) = Heading::parse(line)
            && !text.is_empty()
        {
            self.emit(ContentBlock::new(ty, text));
        }
    }

    fn callout_fence(&mut self, line: &str) {
        self.cursor.advance();
        let Some(open) = CalloutFence::open(line) else {
            return;
        };
        let body = self.cursor.take_while(|l| !CalloutFence::is_close(l));
        if self.cursor.advance().is_none() {
            log::debug!("callout fence :::{} runs to end of input", open.name);
        }
        self.emit_callout(callout::alias(open.name), open.title, &body.join("\n"));
    }

    fn block_quote(&mut self) {
        let lines = self.cursor.take_while(BlockQuote::is_quote_line);
        let inner = BlockQuote::inner_lines(&lines);
        let Some((&first, rest)) = inner.split_first() else {
            return;
        };

        match callout::classify_quote(first, self.in_hero) {
            QuoteShape::PullQuote => self.pull_quote(first, rest),
            QuoteShape::Standfirst => {
                let text = Paragraph::join(&inner);
                let text = BoldLine::inner(&text).map(str::to_string).unwrap_or(text);
                self.emit(ContentBlock::new(BlockType::Standfirst, text));
            }
            QuoteShape::InsightCard => {
                let title = callout::insight_title(first).unwrap_or_default();
                let ty = callout::classify_insight(title);
                self.emit_callout(ty, Some(title), &rest.join("\n"));
            }
            QuoteShape::Generic => {
                self.emit_callout(BlockType::Callout, None, &inner.join("\n"));
            }
        }
    }

    /// `> ## words`, optionally closed by an attribution line (`> — Author`).
    fn pull_quote(&mut self, first: &str, rest: &[&str]) {
        let mut body: Vec<&str> = vec![first.trim().trim_start_matches('#').trim()];
        body.extend(rest.iter().copied());

        let source = body
            .last()
            .and_then(|l| attribution(l))
            .map(str::to_string);
        if source.is_some() {
            body.pop();
        }

        let text = body.join("\n").trim().to_string();
        if text.is_empty() {
            return;
        }
        let block = ContentBlock::new(BlockType::Quote, text);
        self.emit(match source {
            Some(source) => block.with_source(source),
            None => block,
        });
    }

    fn bold_standfirst(&mut self, line: &str) {
        self.cursor.advance();
        if let Some(text) = BoldLine::inner(line) {
            self.emit(ContentBlock::new(BlockType::Standfirst, text));
        }
    }

    fn image(&mut self, line: &str) {
        self.cursor.advance();
        match Image::parse(line) {
            Some(ImageLine::Placeholder { prompt }) => {
                self.emit_callout(BlockType::Callout, None, prompt);
            }
            Some(ImageLine::Picture { alt, src }) => {
                let mut block = ContentBlock::new(BlockType::Figure, alt).with_source(src);
                if !alt.is_empty() {
                    block = block.with_caption(alt);
                }
                self.emit(block);
            }
            None => {}
        }
    }

    fn emoji_shortcut(&mut self, line: &str) {
        self.cursor.advance();
        if let Some((ty, text)) = callout::emoji_shortcut(line) {
            self.emit_callout(ty, None, text);
        }
    }

    /// A run of list items of one kind.
    ///
    /// Indented lines below an item belong to the list: indented markers become
    /// items of their own, anything else continues the previous item. A single
    /// blank line between two items of the same kind does not end the list.
    fn list(&mut self, kind: ListKind) {
        let mut items: Vec<String> = vec![];

        while let Some(line) = self.cursor.peek() {
            let marker = ListMarker::parse(line);
            let continues = match marker {
                Some((k, _)) if k == kind => true,
                Some(_) => ListMarker::is_indented(line) && !items.is_empty(),
                None if line.trim().is_empty() => {
                    let next = self.cursor.peek_nth(1).and_then(ListMarker::parse);
                    if !items.is_empty() && matches!(next, Some((k, _)) if k == kind) {
                        self.cursor.advance();
                        continue;
                    }
                    false
                }
                None => {
                    ListMarker::is_indented(line)
                        && !items.is_empty()
                        && !self.classifier.classify(line).starts_block(self.in_hero)
                }
            };
            if !continues {
                break;
            }
            self.cursor.advance();

            match marker {
                Some((_, text)) => items.push(text.to_string()),
                None => {
                    if let Some(last) = items.last_mut() {
                        last.push(' ');
                        last.push_str(line.trim());
                    }
                }
            }
        }

        items.retain(|i| !i.is_empty());
        if items.is_empty() {
            return;
        }
        let ty = match kind {
            ListKind::Bullet => BlockType::List,
            ListKind::Numbered => BlockType::NumberedList,
        };
        self.emit(ContentBlock::list(ty, items));
    }

    fn code_fence(&mut self, kind: FenceKind, line: &str) {
        self.cursor.advance();
        let lang = CodeFence::language(line);
        let body = self.cursor.take_while(|l| !CodeFence::closes(kind, l));
        if self.cursor.advance().is_none() {
            log::debug!("code fence runs to end of input");
        }

        let code = body.join("\n");
        if code.trim().is_empty() {
            return;
        }
        let block = ContentBlock::new(BlockType::Code, code);
        self.emit(match lang {
            Some(lang) => block.with_caption(lang),
            None => block,
        });
    }

    fn pipe_table(&mut self) {
        let rows = self.cursor.take_while(PipeTable::is_row);
        if rows.len() < 2 {
            log::debug!("dropping pipe table with {} row(s)", rows.len());
            return;
        }
        if let Some((title, body)) = PipeTable::sidebar(&rows) {
            self.emit_callout(BlockType::Callout, Some(title), body);
            return;
        }
        let table = rows.iter().map(|r| r.trim()).collect::<Vec<_>>().join("\n");
        self.emit(ContentBlock::new(BlockType::Table, table));
    }

    /// Greedy fallback: the current line plus every following line that opens
    /// no other block.
    fn paragraph(&mut self) {
        let mut lines: Vec<&str> = self.cursor.advance().into_iter().collect();
        let in_hero = self.in_hero;
        let classifier = &self.classifier;
        lines.extend(
            self.cursor
                .take_while(|l| !classifier.classify(l).starts_block(in_hero)),
        );

        let text = Paragraph::join(&lines);
        if !text.is_empty() {
            self.emit(ContentBlock::new(BlockType::Paragraph, text));
        }
    }
}

/// The author of a pull-quote attribution line (`— Name`, `– Name`, `-- Name`).
fn attribution(line: &str) -> Option<&str> {
    let t = line.trim();
    let name = ["—", "–", "--"]
        .iter()
        .find_map(|dash| t.strip_prefix(dash))?
        .trim();
    (!name.is_empty()).then_some(name)
}
