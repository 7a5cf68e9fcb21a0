//! Statistics only: time breakdown and category breakdown.

use super::ViewArgs;
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BreakdownArgs {
    #[command(flatten)]
    view: ViewArgs,
}

pub fn cmd(args: BreakdownArgs) -> Result<()> {
    let dashboard = args.view.open()?;
    let summary = dashboard.summary();

    msg_print!(Message::ViewHeader(dashboard.label()), true);
    View::time_breakdown(&summary)?;
    View::category_breakdown(&summary, dashboard.categories(), dashboard.config().color)?;

    Ok(())
}
