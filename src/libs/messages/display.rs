//! Display implementation for timeline messages.
//!
//! All user-facing text lives here so commands only deal with structured
//! [`Message`] values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === DASHBOARD MESSAGES ===
            Message::DashboardTitle => "Time Timeline".to_string(),
            Message::ViewHeader(label) => format!("🗓️  {}", label),
            Message::NoBlocksForView(label) => format!("No time blocks recorded for {}", label),
            Message::BlocksHeader => "Time blocks".to_string(),
            Message::LegendHeader => "Legend".to_string(),
            Message::TimeBreakdownHeader => "Time Breakdown".to_string(),
            Message::CategoryBreakdownHeader => "Category Breakdown".to_string(),
            Message::FocusPercent(percent) => format!("Focus: {}%", percent),
            Message::ProductiveTime(time) => format!("Productive Time: {}", time),
            Message::IdleTime(time) => format!("Idle Time: {}", time),
            Message::WeekendBlocksHidden(count) => {
                format!("{} weekend block(s) are not shown in week view", count)
            }

            // === EDIT MESSAGES ===
            Message::EditingBlock(category) => format!("Editing {} block", category),
            Message::BlockTime(range) => format!("Time: {}", range),
            Message::BlockDuration(duration) => format!("Duration: {}", duration),
            Message::PromptDescription => "What did you do during this time?".to_string(),
            Message::DescriptionSaved(id) => format!("Description saved for block '{}'", id),
            Message::DescriptionUnchanged => "Description unchanged".to_string(),
            Message::UpdatedBlocksHeader => "Updated blocks (not persisted)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleView => "View settings".to_string(),
            Message::ConfigModuleData => "Data settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultView => "Default view".to_string(),
            Message::PromptBlockGap => "Gap between blocks (percent of timeline width)".to_string(),
            Message::PromptShowWeekends => "Show Saturday and Sunday columns in week view?".to_string(),
            Message::PromptTimelineWidth => "Timeline width (characters)".to_string(),
            Message::PromptColor => "Use colored output?".to_string(),
            Message::PromptDataFile => "Data file (JSON, leave empty for sample data)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === LOGGING MESSAGES ===
            Message::LoggingInitialized(filter) => format!("Logging initialized with filter '{}'", filter),
        };
        write!(f, "{}", text)
    }
}
