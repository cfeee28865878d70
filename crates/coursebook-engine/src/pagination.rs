//! # Pagination
//!
//! Packs a flat block list into pages and builds the table of contents in the
//! same pass.
//!
//! ## Rules, per incoming block
//!
//! - `heading1` flushes any pending page and opens a chapter-start page
//! - `heading2` flushes the pending page if it already holds at least
//!   `min_blocks_per_page` blocks
//! - headings record a TOC entry for the page they land on; that number is
//!   taken after any flush they trigger and before the block is appended
//! - a page is flushed as soon as it holds `max_blocks_per_page` blocks
//! - whatever remains at the end becomes the last page

use serde::{Deserialize, Serialize};

use crate::types::{BlockType, ContentBlock};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("max_blocks_per_page must be at least 1")]
    ZeroPageSize,
    #[error("min_blocks_per_page ({min}) exceeds max_blocks_per_page ({max})")]
    MinExceedsMax { min: usize, max: usize },
}

/// Page size bounds, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    min_blocks_per_page: usize,
    max_blocks_per_page: usize,
}

impl PaginationConfig {
    pub const DEFAULT_MIN_BLOCKS_PER_PAGE: usize = 4;
    pub const DEFAULT_MAX_BLOCKS_PER_PAGE: usize = 8;

    pub fn new(
        min_blocks_per_page: usize,
        max_blocks_per_page: usize,
    ) -> Result<Self, PaginationError> {
        if max_blocks_per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        if min_blocks_per_page > max_blocks_per_page {
            return Err(PaginationError::MinExceedsMax {
                min: min_blocks_per_page,
                max: max_blocks_per_page,
            });
        }
        Ok(Self {
            min_blocks_per_page,
            max_blocks_per_page,
        })
    }

    pub fn min_blocks_per_page(&self) -> usize {
        self.min_blocks_per_page
    }

    pub fn max_blocks_per_page(&self) -> usize {
        self.max_blocks_per_page
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            min_blocks_per_page: Self::DEFAULT_MIN_BLOCKS_PER_PAGE,
            max_blocks_per_page: Self::DEFAULT_MAX_BLOCKS_PER_PAGE,
        }
    }
}

/// One page of the paginated book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextbookPage {
    /// 1-based and contiguous.
    pub page_number: usize,
    pub content: Vec<ContentBlock>,
    /// Title of the latest chapter or section heading up to the end of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub is_chapter_start: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContentsItem {
    pub title: String,
    pub page: usize,
    /// 1 to 3, mirroring the heading depth.
    pub level: u8,
}

/// The output of a pagination pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub pages: Vec<TextbookPage>,
    pub toc: Vec<TableOfContentsItem>,
}

/// Incremental paginator: push blocks in document order, then `finish`.
pub struct Paginator {
    config: PaginationConfig,
    pages: Vec<TextbookPage>,
    toc: Vec<TableOfContentsItem>,
    buffer: Vec<ContentBlock>,
    chapter_start: bool,
    section: Option<String>,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config,
            pages: vec![],
            toc: vec![],
            buffer: vec![],
            chapter_start: false,
            section: None,
        }
    }

    pub fn push(&mut self, block: ContentBlock) {
        match block.block_type {
            BlockType::Heading1 => {
                self.flush();
                self.chapter_start = true;
            }
            BlockType::Heading2 if self.buffer.len() >= self.config.min_blocks_per_page => {
                self.flush();
            }
            _ => {}
        }

        if let Some(level) = block.block_type.heading_level() {
            self.toc.push(TableOfContentsItem {
                title: block.content.clone(),
                page: self.next_page_number(),
                level,
            });
            if level <= 2 {
                self.section = Some(block.content.clone());
            }
        }

        self.buffer.push(block);
        if self.buffer.len() >= self.config.max_blocks_per_page {
            self.flush();
        }
    }

    pub fn finish(mut self) -> Pagination {
        // EOF flush
        self.flush();
        Pagination {
            pages: self.pages,
            toc: self.toc,
        }
    }

    /// Number the page currently being filled will receive.
    fn next_page_number(&self) -> usize {
        self.pages.len() + 1
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let page = TextbookPage {
            page_number: self.next_page_number(),
            content: std::mem::take(&mut self.buffer),
            section: self.section.clone(),
            is_chapter_start: std::mem::take(&mut self.chapter_start),
        };
        self.pages.push(page);
    }
}

/// Paginates `blocks` in one pass.
pub fn paginate<I>(blocks: I, config: PaginationConfig) -> Pagination
where
    I: IntoIterator<Item = ContentBlock>,
{
    let mut paginator = Paginator::new(config);
    for block in blocks {
        paginator.push(block);
    }
    paginator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn para(n: usize) -> ContentBlock {
        ContentBlock::new(BlockType::Paragraph, format!("p{n}"))
    }

    fn h(ty: BlockType, title: &str) -> ContentBlock {
        ContentBlock::new(ty, title)
    }

    fn sizes(p: &Pagination) -> Vec<usize> {
        p.pages.iter().map(|page| page.content.len()).collect()
    }

    #[test]
    fn config_validation() {
        assert_eq!(
            PaginationConfig::new(0, 0),
            Err(PaginationError::ZeroPageSize)
        );
        assert_eq!(
            PaginationConfig::new(5, 3),
            Err(PaginationError::MinExceedsMax { min: 5, max: 3 })
        );
        let config = PaginationConfig::new(2, 3).unwrap();
        assert_eq!(config.min_blocks_per_page(), 2);
        assert_eq!(config.max_blocks_per_page(), 3);
    }

    #[test]
    fn defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.min_blocks_per_page(), 4);
        assert_eq!(config.max_blocks_per_page(), 8);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let result = paginate(vec![], PaginationConfig::default());
        assert!(result.pages.is_empty());
        assert!(result.toc.is_empty());
    }

    #[test]
    fn full_pages_flush_at_max() {
        let result = paginate((0..19).map(para), PaginationConfig::default());
        assert_eq!(sizes(&result), vec![8, 8, 3]);
        let numbers: Vec<usize> = result.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(result.pages.iter().all(|p| !p.is_chapter_start));
    }

    #[test]
    fn heading1_forces_break_and_starts_chapter() {
        let blocks = vec![
            para(0),
            h(BlockType::Heading1, "Chapter"),
            para(1),
        ];
        let result = paginate(blocks, PaginationConfig::default());
        assert_eq!(sizes(&result), vec![1, 2]);
        assert!(!result.pages[0].is_chapter_start);
        assert!(result.pages[1].is_chapter_start);
        assert_eq!(result.pages[1].content[0].block_type, BlockType::Heading1);
        assert_eq!(
            result.toc,
            vec![TableOfContentsItem {
                title: "Chapter".into(),
                page: 2,
                level: 1
            }]
        );
    }

    #[test]
    fn heading2_breaks_only_past_min() {
        let mut blocks: Vec<ContentBlock> = (0..3).map(para).collect();
        blocks.push(h(BlockType::Heading2, "Short"));
        blocks.extend((3..7).map(para));
        blocks.push(h(BlockType::Heading2, "Long"));
        blocks.push(para(7));

        let result = paginate(blocks, PaginationConfig::default());
        assert_eq!(sizes(&result), vec![8, 2]);
        assert_eq!(
            result.toc,
            vec![
                TableOfContentsItem {
                    title: "Short".into(),
                    page: 1,
                    level: 2
                },
                TableOfContentsItem {
                    title: "Long".into(),
                    page: 2,
                    level: 2
                },
            ]
        );
    }

    #[test]
    fn heading3_entry_points_at_page_it_lands_on() {
        // The heading is the eighth block: it fills page 1 and triggers the flush.
        let mut blocks: Vec<ContentBlock> = (0..7).map(para).collect();
        blocks.push(h(BlockType::Heading3, "Edge"));
        blocks.push(para(7));

        let result = paginate(blocks, PaginationConfig::default());
        assert_eq!(sizes(&result), vec![8, 1]);
        assert_eq!(result.toc[0].page, 1);
        assert_eq!(
            result.pages[0].content.last().map(|b| b.content.as_str()),
            Some("Edge")
        );
    }

    #[test]
    fn sections_follow_latest_heading() {
        let blocks = vec![
            para(0),
            h(BlockType::Heading1, "Intro"),
            para(1),
            h(BlockType::Heading3, "Minor"),
            h(BlockType::Heading1, "Body"),
            h(BlockType::Heading2, "Part A"),
        ];
        let result = paginate(blocks, PaginationConfig::default());
        let sections: Vec<Option<&str>> =
            result.pages.iter().map(|p| p.section.as_deref()).collect();
        assert_eq!(sections, vec![None, Some("Intro"), Some("Part A")]);
    }

    #[test]
    fn min_zero_never_emits_empty_pages() {
        let config = PaginationConfig::new(0, 2).unwrap();
        let blocks = vec![h(BlockType::Heading2, "A"), h(BlockType::Heading2, "B")];
        let result = paginate(blocks, config);
        assert_eq!(sizes(&result), vec![1, 1]);
        assert!(result.pages.iter().all(|p| !p.content.is_empty()));
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = paginate(
            vec![h(BlockType::Heading1, "T")],
            PaginationConfig::default(),
        );
        let json = serde_json::to_value(&result.pages[0]).unwrap();
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["isChapterStart"], true);
        assert_eq!(json["section"], "T");
    }
}
