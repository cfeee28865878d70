//! The `Textbook` facade: one module's text run through the whole pipeline.
//!
//! Parsing happens once. Slot lists usually arrive after the text, so the
//! parsed blocks are kept and only injection and pagination rerun when the
//! slots change.

use serde::{Deserialize, Serialize};

use crate::{
    locale::Locale,
    pagination::{
        Pagination, PaginationConfig, PaginationError, TableOfContentsItem, TextbookPage, paginate,
    },
    parsing::parse_document,
    search::search,
    types::ContentBlock,
    visuals::{ModuleVisualSlot, inject_visual_slots, select_display_slots},
};

#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("module {title:?} has no text")]
    MissingText { title: String },
    #[error("invalid pagination settings: {0}")]
    Pagination(#[from] PaginationError),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A course module as stored upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContent {
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    /// Language tag, e.g. `es-ES`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ModuleContent {
    pub fn from_json(json: &str) -> Result<Self, BookError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn locale(&self) -> Locale {
        self.locale.as_deref().map(Locale::from_tag).unwrap_or_default()
    }
}

/// Reads a planner slot list (a JSON array).
pub fn slots_from_json(json: &str) -> Result<Vec<ModuleVisualSlot>, BookError> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone)]
pub struct Textbook {
    title: String,
    locale: Locale,
    config: PaginationConfig,
    blocks: Vec<ContentBlock>,
    pagination: Pagination,
}

impl Textbook {
    pub fn from_text(
        title: impl Into<String>,
        text: &str,
        locale: Locale,
        config: PaginationConfig,
    ) -> Self {
        let blocks = parse_document(text);
        let pagination = paginate(blocks.iter().cloned(), config);
        Self {
            title: title.into(),
            locale,
            config,
            blocks,
            pagination,
        }
    }

    /// Fails when the module carries no text at all; an empty string is a
    /// valid, empty book.
    pub fn from_module(module: &ModuleContent, config: PaginationConfig) -> Result<Self, BookError> {
        let Some(text) = module.text.as_deref() else {
            return Err(BookError::MissingText {
                title: module.title.clone(),
            });
        };
        Ok(Self::from_text(
            module.title.clone(),
            text,
            module.locale(),
            config,
        ))
    }

    /// Repaginates with the display selection of `slots` injected.
    pub fn with_slots(mut self, slots: &[ModuleVisualSlot]) -> Self {
        self.set_slots(slots);
        self
    }

    pub fn set_slots(&mut self, slots: &[ModuleVisualSlot]) {
        let shown = select_display_slots(slots, &self.title);
        let blocks = inject_visual_slots(self.blocks.clone(), shown, self.locale);
        self.pagination = paginate(blocks, self.config);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Parsed blocks, without figures.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn pages(&self) -> &[TextbookPage] {
        &self.pagination.pages
    }

    pub fn toc(&self) -> &[TableOfContentsItem] {
        &self.pagination.toc
    }

    pub fn page_count(&self) -> usize {
        self.pagination.pages.len()
    }

    /// 1-based lookup.
    pub fn page(&self, number: usize) -> Option<&TextbookPage> {
        number
            .checked_sub(1)
            .and_then(|i| self.pagination.pages.get(i))
    }

    pub fn search(&self, query: &str) -> Vec<usize> {
        search(&self.pagination.pages, query)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}
