//! Display formatting for durations, clock times and view headers.
//!
//! The engines work in fractional minutes and raw timestamps; everything a
//! person reads goes through this module so the dashboard, the editing surface
//! and exports agree on one presentation.
//!
//! ## Formats
//!
//! - **Breakdown durations**: `"H hr M min"` (e.g. `"7 hr 30 min"`)
//! - **Block durations**: `"Hh Mm"`, or `"Mm"` under an hour (e.g. `"1h 30m"`, `"45m"`)
//! - **Clock times**: 12-hour `"h:mm AM"` (e.g. `"9:00 AM"`)
//! - **Table times**: 24-hour `"HH:MM"`
//!
//! Minutes are floored, never rounded, and negative durations display as zero.
//!
//! ## Examples
//!
//! ```rust
//! use timeline::libs::formatter::{format_hr_min, format_short};
//!
//! assert_eq!(format_hr_min(450.0), "7 hr 30 min");
//! assert_eq!(format_short(90.0), "1h 30m");
//! assert_eq!(format_short(45.0), "45m");
//! ```

use super::block::{category_name, Category, TimeBlock, ViewType};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A time block with every field pre-formatted for tables and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedBlock {
    pub id: String,
    pub category: String,
    /// `"HH:MM"`
    pub start: String,
    /// `"HH:MM"`
    pub end: String,
    /// Hours and minutes, zero-padded, e.g. `"01:30"`
    pub duration: String,
    pub description: String,
}

impl FormattedBlock {
    pub fn new(block: &TimeBlock, categories: &[Category]) -> Self {
        FormattedBlock {
            id: block.id.clone(),
            category: category_name(categories, &block.category_id).to_string(),
            start: block.start_time.format("%H:%M").to_string(),
            end: block.end_time.format("%H:%M").to_string(),
            duration: format_duration(&(block.end_time - block.start_time)),
            description: block.description.clone().unwrap_or_default(),
        }
    }
}

// Whole hours and leftover minutes, both floored, negatives as zero.
fn split_minutes(minutes: f64) -> (i64, i64) {
    let minutes = if minutes.is_finite() { minutes.max(0.0) } else { 0.0 };
    let hours = (minutes / 60.0).floor() as i64;
    let mins = (minutes % 60.0).floor() as i64;
    (hours, mins)
}

/// Formats minutes as `"H hr M min"`.
pub fn format_hr_min(minutes: f64) -> String {
    let (hours, mins) = split_minutes(minutes);
    format!("{} hr {} min", hours, mins)
}

/// Formats minutes as `"Hh Mm"`, dropping the hours under one hour.
pub fn format_short(minutes: f64) -> String {
    let (hours, mins) = split_minutes(minutes);
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Formats a chrono duration as `"HH:MM"`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a timestamp as a 12-hour clock time, e.g. `"9:00 AM"`.
pub fn format_clock(time: &NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Header label for a view: `"Monday, May 5, 2025"` or `"Week of May 5, 2025"`.
pub fn view_label(date: NaiveDate, view: ViewType) -> String {
    match view {
        ViewType::Day => date.format("%A, %B %-d, %Y").to_string(),
        ViewType::Week => format!("Week of {}", week_start(date).format("%B %-d, %Y")),
    }
}
