//! Time-spent aggregation over a block list.
//!
//! Splits blocks into productive and idle time and breaks productive time down
//! by category.
//!
//! ## Formulas
//!
//! ```text
//! Productive Percent = round(Productive / (Productive + Idle) * 100)
//! Category Percent   = round(Category Minutes / Productive * 100)
//!
//! Where:
//! - Productive = minutes of every block whose category is not "idle"
//! - Idle       = minutes of every "idle" block
//! ```
//!
//! Both percentages are `0` when their denominator is zero. Ratios are kept at
//! full precision and rounded once at the end, independently per category, so
//! category percentages are not guaranteed to add up to exactly 100.

use super::block::{Category, TimeBlock};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Time spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category_id: String,
    pub name: String,
    pub color: String,
    /// Fractional minutes across all blocks of this category.
    pub minutes: f64,
    /// Share of productive time, rounded to a whole percent.
    pub percent_of_productive: u32,
}

/// Aggregate statistics for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSummary {
    pub productive_minutes: f64,
    pub idle_minutes: f64,
    /// Share of tracked time that was productive, rounded to a whole percent.
    pub productive_percent: u32,
    /// Non-idle categories, most time first. Ties keep catalog order.
    pub per_category: Vec<CategoryStat>,
}

impl TimeSummary {
    pub fn total_minutes(&self) -> f64 {
        self.productive_minutes + self.idle_minutes
    }
}

/// Sums the duration of a set of blocks in minutes.
pub fn total_minutes<'a, I>(blocks: I) -> f64
where
    I: IntoIterator<Item = &'a TimeBlock>,
{
    blocks.into_iter().map(TimeBlock::duration_minutes).sum()
}

/// Rounds `part / whole` to a whole percent, or `0` for an empty whole.
///
/// `f64::round` rounds halves away from zero, which is round-half-up for the
/// non-negative ratios produced by well-formed input.
pub fn percent(part: f64, whole: f64) -> u32 {
    if whole > 0.0 {
        (part / whole * 100.0).round().max(0.0) as u32
    } else {
        0
    }
}

/// Computes productive, idle and per-category time for `blocks`.
///
/// Every non-idle category of the catalog gets an entry, including those with
/// no blocks. Blocks whose category is missing from the catalog still count
/// toward productive time but appear in no category entry.
///
/// # Examples
///
/// ```rust
/// use timeline::libs::aggregate::aggregate;
///
/// let summary = aggregate(&[], &[]);
/// assert_eq!(summary.productive_percent, 0);
/// assert!(summary.per_category.is_empty());
/// ```
pub fn aggregate(blocks: &[TimeBlock], categories: &[Category]) -> TimeSummary {
    let (idle, productive): (Vec<&TimeBlock>, Vec<&TimeBlock>) = blocks.iter().partition(|b| b.is_idle());

    let productive_minutes = total_minutes(productive.iter().copied());
    let idle_minutes = total_minutes(idle.iter().copied());
    let productive_percent = percent(productive_minutes, productive_minutes + idle_minutes);

    let mut per_category: Vec<CategoryStat> = categories
        .iter()
        .filter(|category| !category.is_idle())
        .map(|category| {
            let minutes = total_minutes(blocks.iter().filter(|b| b.category_id == category.id));
            CategoryStat {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                minutes,
                percent_of_productive: percent(minutes, productive_minutes),
            }
        })
        .collect();

    // sort_by is stable, so equal minutes keep catalog order
    per_category.sort_by(|a, b| b.minutes.partial_cmp(&a.minutes).unwrap_or(Ordering::Equal));

    tracing::debug!(
        productive_minutes,
        idle_minutes,
        productive_percent,
        categories = per_category.len(),
        "time summary aggregated"
    );

    TimeSummary {
        productive_minutes,
        idle_minutes,
        productive_percent,
        per_category,
    }
}
