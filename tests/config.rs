#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timeline::libs::block::ViewType;
    use timeline::libs::config::{Config, DataConfig, ViewConfig, CONFIG_FILE_NAME};
    use timeline::libs::data_source::BlockSource;
    use timeline::libs::data_storage::DataStorage;
    use timeline::libs::layout::WeekendPolicy;

    // Tests in this file share HOME, so they run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir, _guard: guard }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.view.is_none());
        assert!(config.data.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            view: Some(ViewConfig {
                block_gap: 0.5,
                weekend: WeekendPolicy::Extend,
                timeline_width: 90,
                default_view: ViewType::Week,
                color: false,
            }),
            data: None,
        };
        config.save().unwrap();

        let read = Config::read().unwrap();
        assert_eq!(read.view, config.view);
        assert!(read.data.is_none());

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"weekend\": \"extend\""));
        assert!(raw.contains("\"default_view\": \"week\""));
        assert!(!raw.contains("\"data\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());

        Config::delete().unwrap();
        assert!(!path.exists());

        // Deleting twice is fine
        Config::delete().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_config_with_retired_hover_delay(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = r#"{
  "view": {
    "block_gap": 0.0,
    "weekend": "clip",
    "hover_delay_ms": 300,
    "timeline_width": 72,
    "default_view": "day",
    "color": true
  }
}"#;
        std::fs::write(path, raw).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.view, Some(ViewConfig::default()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ broken").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_source_defaults_to_sample_data(_ctx: &mut ConfigTestContext) {
        let source = Config::default().source().unwrap();
        assert_eq!(source.categories().len(), 5);
        assert_eq!(source.weekly_blocks().len(), 11);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_source_reads_data_file(ctx: &mut ConfigTestContext) {
        let file = ctx.temp_dir.path().join("blocks.json");
        std::fs::write(&file, r##"{ "categories": [{ "id": "x", "name": "X", "color": "#000000" }] }"##).unwrap();

        let config = Config {
            view: None,
            data: Some(DataConfig { file: Some(file) }),
        };
        let source = config.source().unwrap();
        assert_eq!(source.categories().len(), 1);
        assert!(source.weekly_blocks().is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_source_missing_data_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            view: None,
            data: Some(DataConfig {
                file: Some(PathBuf::from("/nonexistent/timeline/blocks.json")),
            }),
        };
        assert!(config.source().is_err());
    }

    #[test]
    fn test_view_config_defaults() {
        let view = ViewConfig::default();
        assert_eq!(view.block_gap, 0.0);
        assert_eq!(view.weekend, WeekendPolicy::Clip);
        assert_eq!(view.default_view, ViewType::Day);

        let options = view.layout_options();
        assert_eq!(options.block_gap, 0.0);
        assert_eq!(options.weekend, WeekendPolicy::Clip);
    }
}
