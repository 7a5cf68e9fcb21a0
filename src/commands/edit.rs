//! Editing surface for a block's description.
//!
//! Shows the block's category, time range and duration, then asks for a new
//! description (or takes it from `--text`). The updated list is printed;
//! data sources are read-only, so nothing is written back.

use super::ViewArgs;
use crate::{
    libs::{
        error::TimelineError,
        messages::Message,
        selection::{BlockDetails, EditDraft, Selection},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the block to annotate
    id: String,

    #[command(flatten)]
    view: ViewArgs,

    /// New description; prompts interactively when omitted
    #[arg(short, long)]
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut dashboard = args.view.open()?;

    let mut selection = Selection::new();
    selection.select(&args.id);
    let block = match selection.resolve(dashboard.blocks()) {
        Some(block) => block.clone(),
        None => return Err(TimelineError::BlockNotFound(args.id).into()),
    };

    let details = BlockDetails::new(&block, dashboard.categories());
    msg_print!(Message::EditingBlock(details.category.clone()), true);
    msg_print!(Message::BlockTime(details.time_range.clone()));
    msg_print!(Message::BlockDuration(details.duration.clone()));

    let mut draft = EditDraft::open(&block);
    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDescription.to_string())
            .with_initial_text(draft.text())
            .allow_empty(true)
            .interact_text()?,
    };
    draft.set_text(&text);

    if !draft.is_dirty() {
        draft.cancel();
        msg_info!(Message::DescriptionUnchanged);
        return Ok(());
    }

    let updated = draft.submit();
    dashboard.save_description(&updated.id, updated.description.as_deref().unwrap_or_default());
    selection.clear();
    msg_success!(Message::DescriptionSaved(updated.id.clone()));

    msg_print!(Message::UpdatedBlocksHeader, true);
    View::blocks(dashboard.blocks(), dashboard.categories())?;

    Ok(())
}
