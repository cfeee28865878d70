pub mod book;
pub mod callout;
pub mod locale;
pub mod normalize;
pub mod pagination;
pub mod parsing;
pub mod search;
pub mod types;
pub mod visuals;

// Re-export key types for easier usage
pub use book::{BookError, ModuleContent, Textbook, slots_from_json};
pub use locale::Locale;
pub use normalize::normalize;
pub use pagination::{
    Pagination, PaginationConfig, PaginationError, Paginator, TableOfContentsItem, TextbookPage,
    paginate,
};
pub use parsing::{parse_blocks, parse_document};
pub use search::search;
pub use types::{BlockType, ContentBlock};
pub use visuals::{ModuleVisualSlot, SlotType, inject_visual_slots, select_display_slots};
