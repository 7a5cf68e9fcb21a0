//! Time block and category records shared by every engine.
//!
//! A [`TimeBlock`] is a contiguous interval of local wall-clock time tagged
//! with a category. Blocks are plain values: the only field that ever changes
//! is `description`, and it is replaced wholesale by
//! [`save_description`](crate::libs::selection::save_description).
//!
//! ## Preconditions
//!
//! Callers are expected to supply blocks with `start_time < end_time` that do
//! not overlap within a view. Nothing here checks or repairs that: a reversed
//! interval simply yields a negative duration and a negative layout width.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved category id for untracked or idle time.
///
/// Blocks carrying this id are counted as idle time and never appear in the
/// per-category breakdown or the legend.
pub const IDLE_CATEGORY_ID: &str = "idle";

/// Display name used when a block refers to a category missing from the catalog.
pub const IDLE_CATEGORY_NAME: &str = "Idle Time";

/// A categorized interval of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    /// Opaque identifier, stable across edits.
    pub id: String,
    /// Id of a [`Category`] or [`IDLE_CATEGORY_ID`].
    pub category_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Free-text annotation, the only user-editable field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeBlock {
    pub fn new(id: &str, category_id: &str, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        TimeBlock {
            id: id.to_string(),
            category_id: category_id.to_string(),
            start_time,
            end_time,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Returns `true` for blocks tagged with the idle sentinel.
    pub fn is_idle(&self) -> bool {
        self.category_id == IDLE_CATEGORY_ID
    }

    /// Returns `true` when the block carries a non-empty annotation.
    pub fn has_description(&self) -> bool {
        self.description.as_deref().map_or(false, |d| !d.is_empty())
    }

    /// Length of the block in minutes.
    ///
    /// Computed from the millisecond difference so fractional minutes
    /// survive until display. Reversed intervals give a negative value.
    pub fn duration_minutes(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 60_000.0
    }

    /// Decimal wall-clock hour of the start, e.g. `9.5` for 09:30.
    pub fn start_hour(&self) -> f64 {
        decimal_hour(&self.start_time)
    }

    /// Decimal hour of the end, measured from midnight of the start's day.
    ///
    /// A block ending at the following midnight reports `24.0` rather than
    /// wrapping back to `0.0`.
    pub fn end_hour(&self) -> f64 {
        let day_offset = (self.end_time.date() - self.start_time.date()).num_days() as f64;
        decimal_hour(&self.end_time) + day_offset * 24.0
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }
}

fn decimal_hour(time: &NaiveDateTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

/// A classification label for time blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id; [`IDLE_CATEGORY_ID`] is reserved.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Base color as `#RRGGBB`.
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.id == IDLE_CATEGORY_ID
    }
}

/// Looks up a category display name, falling back to [`IDLE_CATEGORY_NAME`].
pub fn category_name<'a>(categories: &'a [Category], category_id: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(IDLE_CATEGORY_NAME)
}

/// Timeline view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Hour-resolution axis for a single day (06:00 to 24:00).
    #[default]
    Day,
    /// Day-bucket axis, one column per weekday.
    Week,
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewType::Day => write!(f, "day"),
            ViewType::Week => write!(f, "week"),
        }
    }
}
