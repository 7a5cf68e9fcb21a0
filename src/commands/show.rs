//! Full dashboard screen: header, timeline, legend, blocks and breakdowns.

use super::ViewArgs;
use crate::{
    libs::{dashboard::Dashboard, messages::Message, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Step back one day (day view) or one week (week view)
    #[arg(long, conflicts_with = "next")]
    prev: bool,

    /// Step forward one day (day view) or one week (week view)
    #[arg(long)]
    next: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let mut dashboard = args.view.open()?;
    if args.prev {
        dashboard.previous();
    } else if args.next {
        dashboard.next();
    }

    render(&dashboard)
}

/// Prints every panel of the dashboard.
pub fn render(dashboard: &Dashboard) -> Result<()> {
    let config = dashboard.config();
    let label = dashboard.label();

    msg_print!(Message::DashboardTitle);
    msg_print!(Message::ViewHeader(label.clone()), true);

    if dashboard.blocks().is_empty() {
        msg_info!(Message::NoBlocksForView(label));
        return Ok(());
    }

    View::timeline(
        dashboard.blocks(),
        &dashboard.positions(),
        dashboard.categories(),
        &dashboard.axis_labels(),
        config.timeline_width,
        config.color,
    )?;

    let hidden = dashboard.hidden_weekend_blocks();
    if hidden > 0 {
        msg_warning!(Message::WeekendBlocksHidden(hidden));
    }

    View::blocks(dashboard.blocks(), dashboard.categories())?;

    let summary = dashboard.summary();
    View::time_breakdown(&summary)?;
    View::category_breakdown(&summary, dashboard.categories(), config.color)?;

    Ok(())
}
