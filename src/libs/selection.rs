//! Block selection and description editing.
//!
//! Editing never mutates a shared list: [`save_description`] returns a new
//! list with exactly one description replaced, so a render pass holding the
//! previous snapshot keeps seeing consistent data.

use super::block::{category_name, Category, TimeBlock};
use super::formatter::{format_clock, format_short};

/// Tracks which block, if any, is the active editing target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the single selected block, replacing any previous one.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolves the selection against a block list.
    ///
    /// Returns `None` when nothing is selected or the id is no longer present.
    pub fn resolve<'a>(&self, blocks: &'a [TimeBlock]) -> Option<&'a TimeBlock> {
        let id = self.selected.as_deref()?;
        blocks.iter().find(|b| b.id == id)
    }
}

/// Returns a copy of `blocks` with the description of block `id` replaced.
///
/// All other fields and all other blocks are left untouched. An unknown id is
/// not an error: the result is equal to the input element for element.
///
/// # Examples
///
/// ```rust
/// use timeline::libs::selection::save_description;
///
/// let blocks = Vec::new();
/// assert!(save_description(&blocks, "missing", "text").is_empty());
/// ```
pub fn save_description(blocks: &[TimeBlock], id: &str, new_description: &str) -> Vec<TimeBlock> {
    let mut matched = false;
    let updated: Vec<TimeBlock> = blocks
        .iter()
        .map(|block| {
            if block.id == id {
                matched = true;
                TimeBlock {
                    description: Some(new_description.to_string()),
                    ..block.clone()
                }
            } else {
                block.clone()
            }
        })
        .collect();

    if !matched {
        tracing::debug!(id, "description save skipped, no block with this id");
    }

    updated
}

/// State of the description editor opened on one block.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    block: TimeBlock,
    text: String,
}

impl EditDraft {
    /// Opens an editor pre-filled with the block's current description.
    pub fn open(block: &TimeBlock) -> Self {
        EditDraft {
            block: block.clone(),
            text: block.description.clone().unwrap_or_default(),
        }
    }

    pub fn block(&self) -> &TimeBlock {
        &self.block
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Returns `true` when the draft differs from the stored description.
    pub fn is_dirty(&self) -> bool {
        self.block.description.as_deref().unwrap_or_default() != self.text
    }

    /// Finishes editing, yielding the block with only its description changed.
    pub fn submit(self) -> TimeBlock {
        TimeBlock {
            description: Some(self.text),
            ..self.block
        }
    }

    /// Abandons the draft, yielding the block unchanged.
    pub fn cancel(self) -> TimeBlock {
        self.block
    }
}

/// What the editing surface shows about a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDetails {
    pub id: String,
    pub category: String,
    /// `"9:00 AM - 10:30 AM"`
    pub time_range: String,
    /// `"1h 30m"` or `"45m"`
    pub duration: String,
    pub description: Option<String>,
}

impl BlockDetails {
    pub fn new(block: &TimeBlock, categories: &[Category]) -> Self {
        BlockDetails {
            id: block.id.clone(),
            category: category_name(categories, &block.category_id).to_string(),
            time_range: format!("{} - {}", format_clock(&block.start_time), format_clock(&block.end_time)),
            duration: format_short(block.duration_minutes()),
            description: block.description.clone().filter(|d| !d.is_empty()),
        }
    }
}
