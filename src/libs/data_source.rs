//! Sources of time blocks and categories.
//!
//! The dashboard reads its data through [`BlockSource`]. Two sources ship
//! with the application:
//!
//! - [`MockData`]: built-in sample week (Monday May 5, 2025 onward), one block
//!   table per weekday plus a coarser weekly sample.
//! - [`JsonSource`]: the same shape loaded from a JSON file.
//!
//! Sources are read-only. Description edits produce new lists and are never
//! written back.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "categories": [{ "id": "university", "name": "University Work", "color": "#4A78BD" }],
//!   "days": {
//!     "monday": [
//!       { "id": "mon-1", "categoryId": "university",
//!         "startTime": "2025-05-05T09:00:00", "endTime": "2025-05-05T10:30:00" }
//!     ]
//!   },
//!   "weekly": []
//! }
//! ```

use super::block::{Category, TimeBlock, ViewType, IDLE_CATEGORY_ID};
use super::error::{Result, TimelineError};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Supplies the block lists and category catalog the engines work on.
pub trait BlockSource {
    fn categories(&self) -> &[Category];

    /// Blocks recorded for the weekday of `date`.
    fn blocks_for_date(&self, date: NaiveDate) -> Vec<TimeBlock>;

    /// Blocks for the week view.
    fn weekly_blocks(&self) -> Vec<TimeBlock>;

    /// Blocks to show for a view anchored at `date`.
    fn blocks_for_view(&self, date: NaiveDate, view: ViewType) -> Vec<TimeBlock> {
        match view {
            ViewType::Day => self.blocks_for_date(date),
            ViewType::Week => self.weekly_blocks(),
        }
    }
}

/// In-memory block tables keyed by weekday.
#[derive(Debug, Clone, Default)]
pub struct WeekTables {
    categories: Vec<Category>,
    days: HashMap<Weekday, Vec<TimeBlock>>,
    weekly: Vec<TimeBlock>,
}

impl WeekTables {
    pub fn new(categories: Vec<Category>, days: HashMap<Weekday, Vec<TimeBlock>>, weekly: Vec<TimeBlock>) -> Self {
        WeekTables { categories, days, weekly }
    }
}

impl BlockSource for WeekTables {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn blocks_for_date(&self, date: NaiveDate) -> Vec<TimeBlock> {
        self.days.get(&date.weekday()).cloned().unwrap_or_default()
    }

    fn weekly_blocks(&self) -> Vec<TimeBlock> {
        self.weekly.clone()
    }
}

/// First day of the built-in sample week.
pub fn mock_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 5).unwrap_or_default()
}

/// Built-in sample data.
pub struct MockData;

impl MockData {
    pub fn tables() -> WeekTables {
        let days: HashMap<Weekday, Vec<TimeBlock>> = DAY_ROWS
            .iter()
            .enumerate()
            .map(|(offset, rows)| {
                let weekday = (mock_base_date() + Duration::days(offset as i64)).weekday();
                (weekday, rows.iter().map(|row| row.to_block(offset as i64)).collect())
            })
            .collect();
        let weekly: Vec<TimeBlock> = WEEKLY_ROWS.iter().map(|(offset, row)| row.to_block(*offset)).collect();

        WeekTables::new(mock_categories(), days, weekly)
    }
}

/// Category catalog of the sample data.
pub fn mock_categories() -> Vec<Category> {
    vec![
        Category::new("university", "University Work", "#4A78BD"),
        Category::new("business", "Business Work", "#E19A3C"),
        Category::new("trw", "TRW Work", "#6BB536"),
        Category::new("ai-automation", "AI Automation Campus", "#A23BC9"),
        Category::new(IDLE_CATEGORY_ID, "Idle Time", "#E8E8E8"),
    ]
}

// Local wall-clock time `hour:minute` on the sample day `offset`; hour 24 is the next midnight.
fn sample_time(offset: i64, hour: i64, minute: i64) -> NaiveDateTime {
    let midnight = mock_base_date().and_hms_opt(0, 0, 0).unwrap_or_default();
    midnight + Duration::days(offset) + Duration::hours(hour) + Duration::minutes(minute)
}

struct Row {
    id: &'static str,
    category: &'static str,
    start: (i64, i64),
    end: (i64, i64),
    description: &'static str,
}

impl Row {
    fn to_block(&self, offset: i64) -> TimeBlock {
        TimeBlock::new(
            self.id,
            self.category,
            sample_time(offset, self.start.0, self.start.1),
            sample_time(offset, self.end.0, self.end.1),
        )
        .with_description(self.description)
    }
}

const fn row(id: &'static str, category: &'static str, start: (i64, i64), end: (i64, i64), description: &'static str) -> Row {
    Row { id, category, start, end, description }
}

const MONDAY: &[Row] = &[
    row("mon-1", "idle", (6, 0), (9, 0), "Morning idle time"),
    row("mon-2", "university", (9, 0), (10, 30), "Research paper review"),
    row("mon-3", "idle", (10, 30), (11, 0), "Coffee break"),
    row("mon-4", "business", (11, 0), (12, 30), "Client meeting"),
    row("mon-5", "idle", (12, 30), (13, 30), "Lunch break"),
    row("mon-6", "trw", (13, 30), (15, 0), "Project planning"),
    row("mon-7", "idle", (15, 0), (15, 30), "Short break"),
    row("mon-8", "ai-automation", (15, 30), (18, 30), "AI model training"),
    row("mon-9", "idle", (18, 30), (19, 0), "Dinner break"),
    row("mon-10", "university", (19, 0), (20, 0), "Lecture preparation"),
    row("mon-11", "business", (20, 0), (21, 0), "Email correspondence"),
    row("mon-12", "idle", (21, 0), (24, 0), "Evening relaxation"),
];

const TUESDAY: &[Row] = &[
    row("tue-1", "idle", (6, 0), (8, 30), "Morning routine"),
    row("tue-2", "business", (8, 30), (11, 0), "Quarterly planning meeting"),
    row("tue-3", "idle", (11, 0), (11, 30), "Break"),
    row("tue-4", "trw", (11, 30), (13, 0), "Code review session"),
    row("tue-5", "idle", (13, 0), (14, 0), "Lunch break"),
    row("tue-6", "ai-automation", (14, 0), (17, 30), "Feature development"),
    row("tue-7", "idle", (17, 30), (18, 30), "Commute and dinner"),
    row("tue-8", "university", (18, 30), (20, 30), "Grading assignments"),
    row("tue-9", "idle", (20, 30), (24, 0), "Personal time"),
];

const WEDNESDAY: &[Row] = &[
    row("wed-1", "idle", (6, 0), (7, 30), "Morning routine"),
    row("wed-2", "university", (7, 30), (10, 0), "Teaching undergraduate class"),
    row("wed-3", "idle", (10, 0), (10, 30), "Coffee break"),
    row("wed-4", "university", (10, 30), (12, 0), "Office hours"),
    row("wed-5", "idle", (12, 0), (13, 0), "Lunch break"),
    row("wed-6", "business", (13, 0), (15, 30), "Client proposal preparation"),
    row("wed-7", "idle", (15, 30), (16, 0), "Short break"),
    row("wed-8", "trw", (16, 0), (18, 0), "Team sync and planning"),
    row("wed-9", "idle", (18, 0), (19, 0), "Commute and dinner"),
    row("wed-10", "ai-automation", (19, 0), (21, 0), "Research and documentation"),
    row("wed-11", "idle", (21, 0), (24, 0), "Personal time"),
];

const THURSDAY: &[Row] = &[
    row("thu-1", "idle", (6, 0), (9, 0), "Morning routine and commute"),
    row("thu-2", "ai-automation", (9, 0), (11, 30), "Model optimization"),
    row("thu-3", "idle", (11, 30), (12, 30), "Lunch break"),
    row("thu-4", "business", (12, 30), (14, 30), "Investor meeting preparation"),
    row("thu-5", "business", (14, 30), (16, 0), "Investor call"),
    row("thu-6", "idle", (16, 0), (16, 30), "Break"),
    row("thu-7", "trw", (16, 30), (19, 0), "Bug fixing and code review"),
    row("thu-8", "idle", (19, 0), (20, 0), "Dinner"),
    row("thu-9", "university", (20, 0), (21, 30), "Research paper writing"),
    row("thu-10", "idle", (21, 30), (24, 0), "Personal time"),
];

const FRIDAY: &[Row] = &[
    row("fri-1", "idle", (6, 0), (8, 0), "Morning routine"),
    row("fri-2", "trw", (8, 0), (10, 30), "Sprint planning"),
    row("fri-3", "idle", (10, 30), (11, 0), "Coffee break"),
    row("fri-4", "business", (11, 0), (12, 30), "Weekly business review"),
    row("fri-5", "idle", (12, 30), (13, 30), "Lunch break"),
    row("fri-6", "university", (13, 30), (15, 30), "Department meeting"),
    row("fri-7", "idle", (15, 30), (16, 0), "Short break"),
    row("fri-8", "ai-automation", (16, 0), (18, 0), "End of week documentation and planning"),
    row("fri-9", "idle", (18, 0), (24, 0), "Weekend begins - personal time"),
];

const SATURDAY: &[Row] = &[
    row("sat-1", "idle", (6, 0), (10, 0), "Weekend morning - personal time"),
    row("sat-2", "university", (10, 0), (12, 0), "Research reading"),
    row("sat-3", "idle", (12, 0), (14, 0), "Lunch and relaxation"),
    row("sat-4", "business", (14, 0), (15, 30), "Catching up on emails"),
    row("sat-5", "idle", (15, 30), (24, 0), "Weekend personal time"),
];

const SUNDAY: &[Row] = &[
    row("sun-1", "idle", (6, 0), (11, 0), "Weekend morning - personal time"),
    row("sun-2", "ai-automation", (11, 0), (13, 0), "Personal project work"),
    row("sun-3", "idle", (13, 0), (15, 0), "Lunch and relaxation"),
    row("sun-4", "university", (15, 0), (17, 0), "Preparing for Monday's lecture"),
    row("sun-5", "business", (17, 0), (18, 30), "Week planning and email organization"),
    row("sun-6", "idle", (18, 30), (24, 0), "Evening relaxation before the work week"),
];

// Indexed by day offset from the base date (Monday first).
const DAY_ROWS: [&[Row]; 7] = [MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY, SUNDAY];

const WEEKLY_ROWS: &[(i64, Row)] = &[
    (0, row("w1", "university", (9, 0), (12, 0), "Monday university work")),
    (0, row("w2", "business", (14, 0), (17, 0), "Monday business work")),
    (1, row("w3", "trw", (10, 0), (13, 0), "Tuesday TRW work")),
    (1, row("w4", "ai-automation", (15, 0), (18, 0), "Tuesday AI Automation work")),
    (2, row("w5", "university", (9, 0), (12, 0), "Wednesday university work")),
    (2, row("w6", "business", (13, 0), (16, 0), "Wednesday business work")),
    (3, row("w7", "trw", (10, 0), (14, 0), "Thursday TRW work")),
    (3, row("w8", "ai-automation", (15, 0), (19, 0), "Thursday AI Automation work")),
    (4, row("w9", "university", (9, 0), (11, 0), "Friday university work")),
    (4, row("w10", "business", (13, 0), (15, 0), "Friday business work")),
    (4, row("w11", "trw", (16, 0), (18, 0), "Friday TRW work")),
];

#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    days: HashMap<String, Vec<TimeBlock>>,
    #[serde(default)]
    weekly: Vec<TimeBlock>,
}

/// Block tables loaded from a JSON file.
pub struct JsonSource;

impl JsonSource {
    /// Reads and validates a data file.
    ///
    /// Day keys are weekday names (`"monday"`, `"Tue"`, ...). Blocks are taken
    /// as-is; intervals are not checked for overlaps or ordering.
    pub fn load(path: &Path) -> Result<WeekTables> {
        let content = fs::read_to_string(path).map_err(|source| TimelineError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DataFile = serde_json::from_str(&content).map_err(|source| TimelineError::DataParse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut days = HashMap::new();
        for (key, blocks) in file.days {
            let weekday = key
                .parse::<Weekday>()
                .map_err(|_| TimelineError::UnknownWeekday(key.clone()))?;
            days.insert(weekday, blocks);
        }

        tracing::debug!(path = %path.display(), days = days.len(), "data file loaded");
        Ok(WeekTables::new(file.categories, days, file.weekly))
    }
}
