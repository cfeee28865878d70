//! Visual slots: externally planned illustration placements, merged into the
//! block list as `figure` blocks before pagination.
//!
//! A slot's `blockIndex` names a position in the block list as parsed, before
//! any figure is inserted. Injection is a single merge pass over the original
//! blocks and the sorted insertion points, so every figure lands directly
//! before the block it was planned against regardless of how many figures
//! precede it.

use serde::{Deserialize, Serialize};

use crate::{
    locale::Locale,
    types::{BlockType, ContentBlock},
};

/// Smallest block index a header slot may occupy; the cover visual never
/// precedes the title and its hook.
pub const HEADER_MIN_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Header,
    Diagram,
    Inline,
}

impl SlotType {
    pub fn default_caption(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SlotType::Header, Locale::En) => "Cover illustration",
            (SlotType::Header, Locale::Es) => "Ilustración de portada",
            (SlotType::Diagram, Locale::En) => "Diagram",
            (SlotType::Diagram, Locale::Es) => "Diagrama",
            (SlotType::Inline, Locale::En) => "Illustration",
            (SlotType::Inline, Locale::Es) => "Ilustración",
        }
    }
}

/// A planned illustration, as delivered by the slot planner. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleVisualSlot {
    pub id: String,
    pub slot_type: SlotType,
    #[serde(default)]
    pub block_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub suggested_visual_style: String,
}

impl ModuleVisualSlot {
    pub fn new(id: impl Into<String>, slot_type: SlotType) -> Self {
        Self {
            id: id.into(),
            slot_type,
            block_index: None,
            heading: None,
            summary: None,
            suggested_visual_style: String::new(),
        }
    }

    pub fn at(mut self, block_index: i64) -> Self {
        self.block_index = Some(block_index);
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Heading, else summary, else the per-type default for `locale`.
    pub fn caption(&self, locale: Locale) -> String {
        [&self.heading, &self.summary]
            .into_iter()
            .flatten()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| self.slot_type.default_caption(locale))
            .to_string()
    }

    /// The synthetic block standing in for this slot.
    pub fn figure(&self, locale: Locale) -> ContentBlock {
        ContentBlock::new(BlockType::Figure, self.id.clone()).with_caption(self.caption(locale))
    }

    /// Where the figure goes in a list of `len` original blocks, or `None` if
    /// the slot has no usable position.
    fn insertion_point(&self, len: usize) -> Option<usize> {
        let requested = match (self.slot_type, self.block_index) {
            (SlotType::Header, index) => index.unwrap_or(0).max(HEADER_MIN_INDEX as i64),
            (_, Some(index)) => index,
            (_, None) => {
                log::debug!("skipping {:?} slot {} without a block index", self.slot_type, self.id);
                return None;
            }
        };
        Some(requested.clamp(0, len as i64) as usize)
    }

    fn repeats_title(&self, title: &str) -> bool {
        self.heading
            .as_deref()
            .is_some_and(|heading| heading.trim().to_lowercase() == title.trim().to_lowercase())
    }
}

/// Picks the slots shown inline: the first diagram, and the first inline slot
/// whose heading does not just repeat the module title (or the first inline
/// slot if they all do).
pub fn select_display_slots<'a>(
    slots: &'a [ModuleVisualSlot],
    title: &str,
) -> Vec<&'a ModuleVisualSlot> {
    let diagram = slots.iter().find(|s| s.slot_type == SlotType::Diagram);

    let inlines: Vec<&ModuleVisualSlot> = slots
        .iter()
        .filter(|s| s.slot_type == SlotType::Inline)
        .collect();
    let inline = inlines
        .iter()
        .find(|s| !s.repeats_title(title))
        .or(inlines.first())
        .copied();

    diagram.into_iter().chain(inline).collect()
}

/// Merges `slots` into `blocks` as `figure` blocks.
///
/// Out-of-range indices are clamped to the list bounds; slots sharing an index
/// keep their input order.
pub fn inject_visual_slots<'s, I>(
    blocks: Vec<ContentBlock>,
    slots: I,
    locale: Locale,
) -> Vec<ContentBlock>
where
    I: IntoIterator<Item = &'s ModuleVisualSlot>,
{
    let len = blocks.len();
    let mut plan: Vec<(usize, &ModuleVisualSlot)> = slots
        .into_iter()
        .filter_map(|slot| slot.insertion_point(len).map(|at| (at, slot)))
        .collect();
    if plan.is_empty() {
        return blocks;
    }
    plan.sort_by_key(|&(at, _)| at);

    let mut merged = Vec::with_capacity(len + plan.len());
    let mut plan = plan.into_iter().peekable();
    for (i, block) in blocks.into_iter().enumerate() {
        while let Some((_, slot)) = plan.next_if(|&(at, _)| at <= i) {
            merged.push(slot.figure(locale));
        }
        merged.push(block);
    }
    merged.extend(plan.map(|(_, slot)| slot.figure(locale)));
    merged
}
