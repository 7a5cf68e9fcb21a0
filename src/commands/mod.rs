//! Command-line interface of the timeline dashboard.
//!
//! Every command except `init` works on a [`Dashboard`] opened from the
//! configured data source at a date and view given by [`ViewArgs`].

pub mod breakdown;
pub mod edit;
pub mod export;
pub mod init;
pub mod show;

use crate::libs::{block::ViewType, config::Config, dashboard::Dashboard, error::TimelineError};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show the timeline, block table and breakdowns")]
    Show(show::ShowArgs),
    #[command(about = "Show productive, idle and per-category time")]
    Breakdown(breakdown::BreakdownArgs),
    #[command(about = "Edit the description of a time block", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Export statistics and blocks")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Show(args) => show::cmd(args),
            Commands::Breakdown(args) => breakdown::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Date and view selection shared by the dashboard commands.
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// View to show; falls back to the configured default view
    #[arg(short, long, value_enum)]
    pub view: Option<ViewType>,

    /// Date to show: `today` or `YYYY-MM-DD`
    #[arg(short, long, default_value = "today")]
    pub date: String,
}

impl ViewArgs {
    /// Opens the dashboard these arguments point at.
    pub fn open(&self) -> Result<Dashboard> {
        let config = Config::read()?;
        let view_config = config.view.clone().unwrap_or_default();
        let date = parse_date(&self.date)?;
        let view = self.view.unwrap_or(view_config.default_view);
        let source = config.source()?;

        tracing::debug!(%date, %view, "opening dashboard");
        Ok(Dashboard::new(source, view_config, date, view))
    }
}

/// Parses `today` (any case) or an ISO `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, TimelineError> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| TimelineError::InvalidDate(date_str.to_string()))
    }
}
