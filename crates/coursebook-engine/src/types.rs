use serde::{Deserialize, Serialize};

/// The closed set of block types a parsed module can contain.
///
/// The serialized names are a frozen contract with the rendering layer, which
/// matches exhaustively on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Heading1,
    Heading2,
    Heading3,
    Meta,
    Standfirst,
    Paragraph,
    Callout,
    Didyouknow,
    Example,
    Exercise,
    Quote,
    List,
    NumberedList,
    Code,
    Table,
    Figure,
    MarginalNote,
    KeyConcept,
    Warning,
    Tip,
    Summary,
}

impl BlockType {
    /// Wire name of the block type.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Heading1 => "heading1",
            BlockType::Heading2 => "heading2",
            BlockType::Heading3 => "heading3",
            BlockType::Meta => "meta",
            BlockType::Standfirst => "standfirst",
            BlockType::Paragraph => "paragraph",
            BlockType::Callout => "callout",
            BlockType::Didyouknow => "didyouknow",
            BlockType::Example => "example",
            BlockType::Exercise => "exercise",
            BlockType::Quote => "quote",
            BlockType::List => "list",
            BlockType::NumberedList => "numbered-list",
            BlockType::Code => "code",
            BlockType::Table => "table",
            BlockType::Figure => "figure",
            BlockType::MarginalNote => "marginal-note",
            BlockType::KeyConcept => "key-concept",
            BlockType::Warning => "warning",
            BlockType::Tip => "tip",
            BlockType::Summary => "summary",
        }
    }

    /// Heading depth (1-3) for heading blocks, `None` for everything else.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockType::Heading1 => Some(1),
            BlockType::Heading2 => Some(2),
            BlockType::Heading3 => Some(3),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed unit of module content.
///
/// Blocks are created once by the parser (or the slot injector) and never
/// mutated afterwards; their order in the containing list is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ContentBlock {
    pub fn new(block_type: BlockType, content: impl Into<String>) -> Self {
        Self {
            block_type,
            content: content.into(),
            items: None,
            caption: None,
            source: None,
        }
    }

    /// A list block; `content` is left empty and the entries live in `items`.
    pub fn list(block_type: BlockType, items: Vec<String>) -> Self {
        Self {
            items: Some(items),
            ..Self::new(block_type, String::new())
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Every searchable string held by the block: its content followed by list items.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.content.as_str())
            .chain(self.items.iter().flatten().map(String::as_str))
    }
}
