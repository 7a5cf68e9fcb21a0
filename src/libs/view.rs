//! Terminal rendering of the dashboard.
//!
//! Turns layout positions and aggregate statistics into text: a timeline bar
//! with its axis, the category legend, a block table and the two breakdown
//! panels. Pure `render_*` helpers build strings; the `View` methods print.

use super::aggregate::TimeSummary;
use super::block::{Category, TimeBlock, IDLE_CATEGORY_ID, IDLE_CATEGORY_NAME};
use super::formatter::{format_hr_min, FormattedBlock};
use super::layout::BlockPosition;
use super::messages::Message;
use super::palette::{fill_for, paint};
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};
use std::collections::HashMap;

/// Glyph for productive blocks.
pub const BLOCK_GLYPH: char = '█';
/// Glyph for idle blocks.
pub const IDLE_GLYPH: char = '░';
/// Glyph for blocks with a description, marking them as annotated.
pub const ANNOTATED_GLYPH: char = '▓';
/// Glyph for uncovered stretches of the axis.
pub const EMPTY_GLYPH: char = ' ';

const BAR_WIDTH: usize = 20;

// Maps a percentage onto a character column, clamped to the bar.
fn column(percent: f64, width: usize) -> usize {
    let col = (percent / 100.0 * width as f64).round();
    col.clamp(0.0, width as f64) as usize
}

fn glyph(block: &TimeBlock) -> char {
    if block.is_idle() {
        IDLE_GLYPH
    } else if block.has_description() {
        ANNOTATED_GLYPH
    } else {
        BLOCK_GLYPH
    }
}

/// Renders blocks onto a bar `width` characters wide.
///
/// Positions outside the axis are clipped here, not in the layout engine.
/// Later blocks overwrite earlier ones where they share a column.
pub fn render_bar(
    blocks: &[TimeBlock],
    positions: &HashMap<String, BlockPosition>,
    categories: &[Category],
    width: usize,
    color: bool,
) -> String {
    let mut cells: Vec<String> = vec![EMPTY_GLYPH.to_string(); width];

    for block in blocks {
        let Some(position) = positions.get(&block.id) else {
            continue;
        };
        let start = column(position.left, width);
        let end = column(position.right(), width);

        let cell = glyph(block).to_string();
        let cell = if color {
            paint(&cell, fill_for(&block.category_id, categories).primary())
        } else {
            cell
        };

        for slot in cells.iter_mut().take(end).skip(start) {
            *slot = cell.clone();
        }
    }

    cells.concat()
}

/// Spreads axis labels evenly across `width` characters.
///
/// The first label is left-aligned, the last right-aligned and the rest are
/// placed at their tick positions when there is room.
pub fn render_axis(labels: &[String], width: usize) -> String {
    let mut line = vec![' '; width];
    if labels.is_empty() || width == 0 {
        return String::new();
    }

    let last_index = labels.len().saturating_sub(1).max(1);
    let mut next_free = 0;
    for (index, label) in labels.iter().enumerate() {
        let tick = index * width / last_index;
        let len = label.chars().count();
        let start = tick.saturating_sub(if index == 0 { 0 } else if index == labels.len() - 1 { len } else { len / 2 });
        if start < next_free || start + len > width {
            continue;
        }
        for (offset, ch) in label.chars().enumerate() {
            line[start + offset] = ch;
        }
        next_free = start + len + 1;
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Renders a horizontal progress bar for a percentage.
pub fn render_progress(percent: u32, width: usize) -> String {
    let filled = column(percent as f64, width);
    format!("{}{}", BLOCK_GLYPH.to_string().repeat(filled), IDLE_GLYPH.to_string().repeat(width - filled))
}

/// One legend entry per non-idle category, then idle time last.
pub fn render_legend(categories: &[Category], color: bool) -> String {
    let swatch = |category_id: &str| {
        let dot = "●";
        if color {
            paint(dot, fill_for(category_id, categories).primary())
        } else {
            dot.to_string()
        }
    };

    categories
        .iter()
        .filter(|c| !c.is_idle())
        .map(|c| format!("{} {}", swatch(&c.id), c.name))
        .chain(std::iter::once(format!("{} {}", swatch(IDLE_CATEGORY_ID), IDLE_CATEGORY_NAME)))
        .collect::<Vec<_>>()
        .join("   ")
}

pub struct View {}

impl View {
    /// Prints the timeline bar framed by its axis labels.
    pub fn timeline(
        blocks: &[TimeBlock],
        positions: &HashMap<String, BlockPosition>,
        categories: &[Category],
        labels: &[String],
        width: usize,
        color: bool,
    ) -> Result<()> {
        let bar = render_bar(blocks, positions, categories, width, color);
        println!("┌{}┐", "─".repeat(width));
        println!("│{}│", bar);
        println!("└{}┘", "─".repeat(width));
        println!(" {}", render_axis(labels, width));
        msg_print!(Message::LegendHeader, true);
        println!("{}", render_legend(categories, color));

        Ok(())
    }

    /// Prints the block table.
    pub fn blocks(blocks: &[TimeBlock], categories: &[Category]) -> Result<()> {
        msg_print!(Message::BlocksHeader, true);
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "CATEGORY", "START", "END", "DURATION", "DESCRIPTION"]);
        for block in blocks {
            let formatted = FormattedBlock::new(block, categories);
            table.add_row(row![
                formatted.id,
                formatted.category,
                formatted.start,
                formatted.end,
                formatted.duration,
                formatted.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints focus percent plus productive and idle totals.
    pub fn time_breakdown(summary: &TimeSummary) -> Result<()> {
        msg_print!(Message::TimeBreakdownHeader, true);
        println!("{} {}", render_progress(summary.productive_percent, BAR_WIDTH), Message::FocusPercent(summary.productive_percent));

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.add_row(row![Message::ProductiveTime(format_hr_min(summary.productive_minutes))]);
        table.add_row(row![Message::IdleTime(format_hr_min(summary.idle_minutes))]);
        table.printstd();

        Ok(())
    }

    /// Prints one row per category, most time first.
    pub fn category_breakdown(summary: &TimeSummary, categories: &[Category], color: bool) -> Result<()> {
        msg_print!(Message::CategoryBreakdownHeader, true);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        for stat in &summary.per_category {
            let bar = render_progress(stat.percent_of_productive, BAR_WIDTH);
            let bar = if color {
                paint(&bar, fill_for(&stat.category_id, categories).primary())
            } else {
                bar
            };
            table.add_row(row![
                stat.name,
                format_hr_min(stat.minutes),
                format!("{}%", stat.percent_of_productive),
                bar
            ]);
        }
        table.printstd();

        Ok(())
    }
}
