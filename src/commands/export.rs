//! Export of the current view's statistics and blocks.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format

use super::ViewArgs;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to a timestamped name such as
    /// `timeline_export_20250505_143022.csv` in the working directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

/// # Examples
///
/// ```bash
/// # Export today's statistics as CSV
/// timeline export
///
/// # Export the sample week as JSON
/// timeline export --view week --date 2025-05-05 --format json
/// ```
pub fn cmd(args: ExportArgs) -> Result<()> {
    let dashboard = args.view.open()?;
    let data = ExportData::new(&dashboard.label(), &dashboard.summary(), dashboard.blocks(), dashboard.categories());

    Exporter::new(args.format, args.output).export(&data)
}
