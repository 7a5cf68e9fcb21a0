//! Core library modules for the timeline dashboard.
//!
//! ## Features
//!
//! - **Engines**: Timeline layout, time aggregation, selection and hover intent
//! - **Data**: Block and category records, sample data and JSON data files
//! - **Presentation**: Formatting, color palette, terminal rendering, export
//! - **Infrastructure**: Configuration, data storage, messages, logging, errors
//!
//! ## Usage
//!
//! ```rust
//! use timeline::libs::aggregate::aggregate;
//! use timeline::libs::data_source::{BlockSource, MockData};
//! use timeline::libs::block::ViewType;
//!
//! let source = MockData::tables();
//! let blocks = source.blocks_for_view(timeline::libs::data_source::mock_base_date(), ViewType::Day);
//! let summary = aggregate(&blocks, source.categories());
//! assert!(summary.productive_percent <= 100);
//! ```

pub mod aggregate;
pub mod block;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod hover;
pub mod layout;
pub mod logging;
pub mod messages;
pub mod navigation;
pub mod palette;
pub mod selection;
pub mod view;
