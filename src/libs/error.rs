//! Error types for the dashboard's collaborators.
//!
//! The layout and aggregation engines cannot fail. These errors cover the
//! edges around them: loading data files, parsing user input and resolving
//! block ids for the editing surface.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("No time block with id '{0}'")]
    BlockNotFound(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD or 'today'")]
    InvalidDate(String),

    #[error("Failed to read data file {path}: {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown weekday key '{0}' in data file")]
    UnknownWeekday(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
