#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timeline::libs::aggregate::aggregate;
    use timeline::libs::data_source::{mock_base_date, BlockSource, MockData};
    use timeline::libs::export::{ExportData, ExportFormat, Exporter};
    use timeline::libs::selection::save_description;

    struct ExportTestContext {
        temp_dir: TempDir,
        data: ExportData,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let source = MockData::tables();
            let blocks = save_description(&source.blocks_for_date(mock_base_date()), "mon-4", "Signed the contract");
            let summary = aggregate(&blocks, source.categories());
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                data: ExportData::new("Monday, May 5, 2025", &summary, &blocks, source.categories()),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_data(ctx: &mut ExportTestContext) {
        assert_eq!(ctx.data.productive_time, "9 hr 30 min");
        assert_eq!(ctx.data.idle_time, "8 hr 30 min");
        assert_eq!(ctx.data.productive_percent, 53);
        assert_eq!(ctx.data.categories[0].name, "AI Automation Campus");
        assert_eq!(ctx.data.categories[0].time, "3 hr 0 min");
        assert_eq!(ctx.data.blocks.len(), 12);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("export.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(&ctx.data).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("\"Monday, May 5, 2025\""));
        assert!(content.contains("Focus,53%"));
        assert!(content.contains("University Work,2 hr 30 min,26%"));
        assert!(content.contains("mon-4,Business Work,11:00,12:30,01:30,Signed the contract"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("export.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone())).export(&ctx.data).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["label"], "Monday, May 5, 2025");
        assert_eq!(value["productive_percent"], 53);
        assert_eq!(value["categories"].as_array().unwrap().len(), 4);
        assert_eq!(value["blocks"][3]["description"], "Signed the contract");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("export.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone())).export(&ctx.data).unwrap();

        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("timeline_export_"));
        assert!(name.ends_with(".json"));
        assert_eq!(ExportFormat::Excel.extension(), "xlsx");
    }
}
