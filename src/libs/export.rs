//! Export of dashboard statistics and blocks.
//!
//! Writes the current view's summary together with its formatted blocks to
//! CSV, JSON or Excel.
//!
//! ## Output Shape
//!
//! - **CSV**: a header section with the view label and totals, a category
//!   section, then the block rows.
//! - **JSON**: one pretty-printed [`ExportData`] object.
//! - **Excel**: a single worksheet laid out like the CSV.

use crate::{
    libs::{
        aggregate::TimeSummary,
        block::{Category, TimeBlock},
        formatter::{format_hr_min, FormattedBlock},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// Excel workbook.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Per-category row of an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportCategory {
    pub id: String,
    pub name: String,
    pub time: String,
    pub minutes: f64,
    pub percent: u32,
}

/// Everything written by one export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// View header, e.g. `"Monday, May 5, 2025"`.
    pub label: String,
    pub productive_time: String,
    pub idle_time: String,
    pub productive_percent: u32,
    pub categories: Vec<ExportCategory>,
    pub blocks: Vec<FormattedBlock>,
}

impl ExportData {
    pub fn new(label: &str, summary: &TimeSummary, blocks: &[TimeBlock], categories: &[Category]) -> Self {
        ExportData {
            label: label.to_string(),
            productive_time: format_hr_min(summary.productive_minutes),
            idle_time: format_hr_min(summary.idle_minutes),
            productive_percent: summary.productive_percent,
            categories: summary
                .per_category
                .iter()
                .map(|stat| ExportCategory {
                    id: stat.category_id.clone(),
                    name: stat.name.clone(),
                    time: format_hr_min(stat.minutes),
                    minutes: stat.minutes,
                    percent: stat.percent_of_productive,
                })
                .collect(),
            blocks: blocks.iter().map(|b| FormattedBlock::new(b, categories)).collect(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, defaulting to a timestamped file in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("timeline_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, data: &ExportData) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(data)?,
            ExportFormat::Json => self.export_json(data)?,
            ExportFormat::Excel => self.export_excel(data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, data: &ExportData) -> Result<()> {
        // Sections have different widths
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record([data.label.as_str()])?;
        wtr.write_record(["Productive Time", data.productive_time.as_str()])?;
        wtr.write_record(["Idle Time", data.idle_time.as_str()])?;
        wtr.write_record(["Focus", format!("{}%", data.productive_percent).as_str()])?;
        wtr.write_record([""])?;

        wtr.write_record(["Category", "Time", "Percent"])?;
        for category in &data.categories {
            wtr.write_record([category.name.as_str(), category.time.as_str(), format!("{}%", category.percent).as_str()])?;
        }
        wtr.write_record([""])?;

        wtr.write_record(["ID", "Category", "Start", "End", "Duration", "Description"])?;
        for block in &data.blocks {
            wtr.write_record([
                block.id.as_str(),
                block.category.as_str(),
                block.start.as_str(),
                block.end.as_str(),
                block.duration.as_str(),
                block.description.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, data: &ExportData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, data: &ExportData) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, &data.label, &title_format)?;
        worksheet.write_string(2, 0, "Productive Time")?;
        worksheet.write_string(2, 1, &data.productive_time)?;
        worksheet.write_string(3, 0, "Idle Time")?;
        worksheet.write_string(3, 1, &data.idle_time)?;
        worksheet.write_string(4, 0, "Focus")?;
        worksheet.write_string(4, 1, &format!("{}%", data.productive_percent))?;

        let mut row = 6;
        for (col, title) in ["Category", "Time", "Percent"].iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *title, &header_format)?;
        }
        for category in &data.categories {
            row += 1;
            worksheet.write_string(row, 0, &category.name)?;
            worksheet.write_string(row, 1, &category.time)?;
            worksheet.write_number(row, 2, category.percent as f64)?;
        }

        row += 2;
        for (col, title) in ["ID", "Category", "Start", "End", "Duration", "Description"].iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *title, &header_format)?;
        }
        for block in &data.blocks {
            row += 1;
            worksheet.write_string(row, 0, &block.id)?;
            worksheet.write_string(row, 1, &block.category)?;
            worksheet.write_string(row, 2, &block.start)?;
            worksheet.write_string(row, 3, &block.end)?;
            worksheet.write_string(row, 4, &block.duration)?;
            worksheet.write_string(row, 5, &block.description)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
