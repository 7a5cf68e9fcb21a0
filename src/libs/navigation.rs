//! Date and view navigation for the dashboard header.

use super::block::ViewType;
use super::formatter::view_label;
use chrono::{Duration, NaiveDate};

/// The date and view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    date: NaiveDate,
    view: ViewType,
}

impl Navigator {
    pub fn new(date: NaiveDate, view: ViewType) -> Self {
        Navigator { date, view }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    /// Steps back one day in day view, one week in week view.
    pub fn previous(&mut self) {
        self.date = self.date - self.step();
    }

    /// Steps forward one day in day view, one week in week view.
    pub fn next(&mut self) {
        self.date = self.date + self.step();
    }

    pub fn label(&self) -> String {
        view_label(self.date, self.view)
    }

    fn step(&self) -> Duration {
        match self.view {
            ViewType::Day => Duration::days(1),
            ViewType::Week => Duration::weeks(1),
        }
    }
}
