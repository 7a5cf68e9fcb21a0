//! Timeline layout engine.
//!
//! Maps time blocks onto a horizontal axis for the two view modes. Results are
//! percentages of the viewport width, ready for absolute positioning by any
//! renderer.
//!
//! ## Axes
//!
//! ```text
//! Day view:   06:00 ──────────────────────────────────────── 24:00  (18 hours)
//!             left  = (start_hour - 6) / 18 * 100
//!             width = (end_hour - start_hour) / 18 * 100
//!
//! Week view:  | Mon | Tue | Wed | Thu | Fri |                          (5 columns)
//!             left  = weekday_index / 5 * 100
//!             width = 100 / 5
//! ```
//!
//! Week view is a coarse day-bucket summary: every block on a given weekday
//! gets the same column regardless of its hours.
//!
//! The engine never clamps. A block outside 06:00-24:00 lands outside
//! `0..=100`, and a reversed interval gets a negative width. Clamping is left
//! to whoever draws the result.

use super::block::{TimeBlock, ViewType};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// First hour shown on the day axis.
pub const DAY_START_HOUR: f64 = 6.0;

/// Number of hours spanned by the day axis (06:00 to 24:00).
pub const DAY_SPAN_HOURS: f64 = 18.0;

/// Number of weekday columns on the week axis.
pub const WORKWEEK_COLUMNS: u32 = 5;

/// Number of columns when weekends are shown.
pub const FULL_WEEK_COLUMNS: u32 = 7;

/// How week view treats Saturday and Sunday blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekendPolicy {
    /// Leave weekend blocks out of the week layout.
    #[default]
    Clip,
    /// Widen the axis to seven columns, Monday through Sunday.
    Extend,
}

impl WeekendPolicy {
    pub fn columns(&self) -> u32 {
        match self {
            WeekendPolicy::Clip => WORKWEEK_COLUMNS,
            WeekendPolicy::Extend => FULL_WEEK_COLUMNS,
        }
    }
}

/// Tunables for [`layout`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutOptions {
    /// Visual gap in percent subtracted from each positive width.
    pub block_gap: f64,
    pub weekend: WeekendPolicy,
}

/// Horizontal placement of one block, in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPosition {
    pub left: f64,
    pub width: f64,
}

impl BlockPosition {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Computes the position of every block for the given view.
///
/// Blocks are keyed by id. In week view with [`WeekendPolicy::Clip`],
/// Saturday and Sunday blocks have no column and are absent from the map.
///
/// # Examples
///
/// ```rust
/// use timeline::libs::block::{TimeBlock, ViewType};
/// use timeline::libs::layout::{layout, LayoutOptions};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
/// let block = TimeBlock::new(
///     "mon-2",
///     "university",
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(10, 30, 0).unwrap(),
/// );
///
/// let positions = layout(&[block], ViewType::Day, &LayoutOptions::default());
/// let pos = positions["mon-2"];
/// assert!((pos.left - 16.6667).abs() < 0.001);
/// assert!((pos.width - 8.3333).abs() < 0.001);
/// ```
pub fn layout(blocks: &[TimeBlock], view: ViewType, options: &LayoutOptions) -> HashMap<String, BlockPosition> {
    let positions: HashMap<String, BlockPosition> = blocks
        .iter()
        .filter_map(|block| {
            let raw = match view {
                ViewType::Day => Some(day_position(block)),
                ViewType::Week => week_position(block, options.weekend),
            }?;
            Some((block.id.clone(), apply_gap(raw, options.block_gap)))
        })
        .collect();

    tracing::debug!(
        view = %view,
        blocks = blocks.len(),
        positioned = positions.len(),
        "timeline layout computed"
    );

    positions
}

/// Position of a block on the 06:00-24:00 axis.
pub fn day_position(block: &TimeBlock) -> BlockPosition {
    let start_hour = block.start_hour();
    let end_hour = block.end_hour();

    BlockPosition {
        left: (start_hour - DAY_START_HOUR) / DAY_SPAN_HOURS * 100.0,
        width: (end_hour - start_hour) / DAY_SPAN_HOURS * 100.0,
    }
}

/// Column of a block on the week axis, or `None` for a clipped weekend day.
pub fn week_position(block: &TimeBlock, weekend: WeekendPolicy) -> Option<BlockPosition> {
    let day_index = block.weekday().num_days_from_monday();
    let columns = weekend.columns();

    if day_index >= columns {
        return None;
    }

    Some(BlockPosition {
        left: day_index as f64 / columns as f64 * 100.0,
        width: 100.0 / columns as f64,
    })
}

// Gap only narrows well-formed blocks; zero or negative widths pass through.
fn apply_gap(position: BlockPosition, gap: f64) -> BlockPosition {
    if gap <= 0.0 || position.width <= 0.0 {
        return position;
    }

    BlockPosition {
        left: position.left,
        width: (position.width - gap).max(0.0),
    }
}

/// Tick labels under the axis.
///
/// Day view yields `"6:00"` through `"24:00"`; week view yields weekday
/// abbreviations, including the weekend under [`WeekendPolicy::Extend`].
pub fn axis_labels(view: ViewType, weekend: WeekendPolicy) -> Vec<String> {
    match view {
        ViewType::Day => {
            let first = DAY_START_HOUR as u32;
            let last = first + DAY_SPAN_HOURS as u32;
            (first..=last).map(|hour| format!("{}:00", hour)).collect()
        }
        ViewType::Week => {
            let mut day = Weekday::Mon;
            (0..weekend.columns())
                .map(|_| {
                    let label = day.to_string();
                    day = day.succ();
                    label
                })
                .collect()
        }
    }
}
