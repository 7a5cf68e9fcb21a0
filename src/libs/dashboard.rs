//! One screen of the dashboard: a data source seen through a date and view.
//!
//! Ties the collaborators together. The block list is a snapshot taken from
//! the source, the layout and summary are derived from it on demand, and
//! edits replace the snapshot with a new list.

use super::aggregate::{aggregate, TimeSummary};
use super::block::{Category, TimeBlock, ViewType};
use super::config::ViewConfig;
use super::data_source::BlockSource;
use super::error::{Result, TimelineError};
use super::layout::{axis_labels, layout, BlockPosition, WeekendPolicy};
use super::navigation::Navigator;
use super::selection::save_description;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

pub struct Dashboard {
    source: Box<dyn BlockSource>,
    config: ViewConfig,
    navigator: Navigator,
    blocks: Vec<TimeBlock>,
}

impl Dashboard {
    pub fn new(source: Box<dyn BlockSource>, config: ViewConfig, date: NaiveDate, view: ViewType) -> Self {
        let navigator = Navigator::new(date, view);
        let blocks = source.blocks_for_view(date, view);
        Dashboard {
            source,
            config,
            navigator,
            blocks,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn categories(&self) -> &[Category] {
        self.source.categories()
    }

    /// Current block snapshot, including any unsaved edits.
    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn label(&self) -> String {
        self.navigator.label()
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
        self.reload();
    }

    pub fn next(&mut self) {
        self.navigator.next();
        self.reload();
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.navigator.set_view(view);
        self.reload();
    }

    pub fn positions(&self) -> HashMap<String, BlockPosition> {
        layout(&self.blocks, self.navigator.view(), &self.config.layout_options())
    }

    pub fn axis_labels(&self) -> Vec<String> {
        axis_labels(self.navigator.view(), self.config.weekend)
    }

    pub fn summary(&self) -> TimeSummary {
        aggregate(&self.blocks, self.categories())
    }

    /// Number of blocks week view drops because they fall on a weekend.
    pub fn hidden_weekend_blocks(&self) -> usize {
        if self.navigator.view() != ViewType::Week || self.config.weekend == WeekendPolicy::Extend {
            return 0;
        }
        self.blocks
            .iter()
            .filter(|b| b.weekday().num_days_from_monday() >= WeekendPolicy::Clip.columns())
            .count()
    }

    pub fn find(&self, id: &str) -> Result<&TimeBlock> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| TimelineError::BlockNotFound(id.to_string()))
    }

    /// Replaces the snapshot with one where block `id` has a new description.
    pub fn save_description(&mut self, id: &str, description: &str) {
        self.blocks = save_description(&self.blocks, id, description);
    }

    // A new date or view discards unsaved edits, as the source is read-only.
    fn reload(&mut self) {
        self.blocks = self.source.blocks_for_view(self.navigator.date(), self.navigator.view());
    }
}
