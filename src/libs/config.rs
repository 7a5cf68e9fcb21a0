//! Configuration management for the timeline dashboard.
//!
//! Settings live in a JSON file in the platform data directory and are split
//! into optional sections, so a missing section simply means "use defaults".
//!
//! ## Configuration Structure
//!
//! - **View Config**: timeline drawing options (gap, weekend handling, width, colors)
//! - **Data Config**: optional JSON data file replacing the built-in sample week
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\timeline\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/timeline/config.json`
//! - **Linux**: `~/.local/share/lacodda/timeline/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timeline::libs::config::Config;
//!
//! let config = Config::read()?;
//! let view = config.view.clone().unwrap_or_default();
//! println!("Timeline width: {}", view.timeline_width);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::block::ViewType;
use super::data_source::{BlockSource, JsonSource, MockData};
use super::data_storage::DataStorage;
use super::layout::{LayoutOptions, WeekendPolicy};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Timeline drawing options.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Gap in percent subtracted from each block width.
    pub block_gap: f64,

    /// How week view treats Saturday and Sunday blocks.
    pub weekend: WeekendPolicy,

    /// Width of the terminal timeline bar in characters.
    pub timeline_width: usize,

    /// View used when the command line does not pick one.
    pub default_view: ViewType,

    /// Whether to color output with 24-bit ANSI escapes.
    pub color: bool,
}

impl Default for ViewConfig {
    /// Defaults: no gap, weekends clipped, 72 columns, day view, colors on.
    fn default() -> Self {
        ViewConfig {
            block_gap: 0.0,
            weekend: WeekendPolicy::Clip,
            timeline_width: 72,
            default_view: ViewType::Day,
            color: true,
        }
    }
}

impl ViewConfig {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            block_gap: self.block_gap,
            weekend: self.weekend,
        }
    }
}

/// Where block data comes from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DataConfig {
    /// JSON data file; the built-in sample week is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Root configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing files are not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Opens the configured block source.
    ///
    /// Uses the data file when one is configured, otherwise the sample week.
    pub fn source(&self) -> Result<Box<dyn BlockSource>> {
        match self.data.as_ref().and_then(|d| d.file.as_ref()) {
            Some(path) => Ok(Box::new(JsonSource::load(path)?)),
            None => Ok(Box::new(MockData::tables())),
        }
    }

    /// Runs the interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "view".to_string(),
                name: "View".to_string(),
            },
            ConfigModule {
                key: "data".to_string(),
                name: "Data".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);

                    let views = [ViewType::Day, ViewType::Week];
                    let view_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultView.to_string())
                        .items(&views)
                        .default(views.iter().position(|v| *v == default.default_view).unwrap_or(0))
                        .interact()?;

                    config.view = Some(ViewConfig {
                        block_gap: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBlockGap.to_string())
                            .default(default.block_gap)
                            .interact_text()?,
                        weekend: if Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowWeekends.to_string())
                            .default(default.weekend == WeekendPolicy::Extend)
                            .interact()?
                        {
                            WeekendPolicy::Extend
                        } else {
                            WeekendPolicy::Clip
                        },
                        timeline_width: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimelineWidth.to_string())
                            .default(default.timeline_width)
                            .interact_text()?,
                        default_view: views[view_index],
                        color: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptColor.to_string())
                            .default(default.color)
                            .interact()?,
                    });
                }
                "data" => {
                    let default = config.data.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleData);

                    let file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataFile.to_string())
                        .default(default.file.map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.data = Some(DataConfig {
                        file: if file.trim().is_empty() { None } else { Some(PathBuf::from(file.trim())) },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
