//! # Timeline - Time Block Dashboard
//!
//! A command-line dashboard for categorized time blocks.
//!
//! ## Features
//!
//! - **Timeline Layout**: Day (06:00-24:00) and week (Monday-Friday) axes
//! - **Time Breakdown**: Productive vs. idle time and focus percentage
//! - **Category Breakdown**: Time and share per category, most time first
//! - **Annotations**: Edit a block's description without touching the source data
//! - **Data Export**: Export statistics and blocks to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeline::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
