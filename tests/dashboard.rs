#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use std::collections::HashMap;
    use test_context::{test_context, TestContext};
    use timeline::libs::block::{Category, TimeBlock, ViewType};
    use timeline::libs::config::ViewConfig;
    use timeline::libs::dashboard::Dashboard;
    use timeline::libs::data_source::{mock_base_date, MockData, WeekTables};
    use timeline::libs::error::TimelineError;
    use timeline::libs::layout::WeekendPolicy;

    struct DashboardTestContext {
        dashboard: Dashboard,
    }

    impl TestContext for DashboardTestContext {
        fn setup() -> Self {
            DashboardTestContext {
                dashboard: Dashboard::new(Box::new(MockData::tables()), ViewConfig::default(), mock_base_date(), ViewType::Day),
            }
        }
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_day_view(ctx: &mut DashboardTestContext) {
        let dashboard = &ctx.dashboard;
        assert_eq!(dashboard.label(), "Monday, May 5, 2025");
        assert_eq!(dashboard.blocks().len(), 12);
        assert_eq!(dashboard.positions().len(), 12);
        assert_eq!(dashboard.axis_labels().len(), 19);
        assert_eq!(dashboard.summary().productive_percent, 53);
        assert_eq!(dashboard.hidden_weekend_blocks(), 0);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_navigation_reloads_blocks(ctx: &mut DashboardTestContext) {
        ctx.dashboard.next();
        assert_eq!(ctx.dashboard.label(), "Tuesday, May 6, 2025");
        assert_eq!(ctx.dashboard.blocks()[0].id, "tue-1");

        ctx.dashboard.previous();
        ctx.dashboard.previous();
        assert_eq!(ctx.dashboard.blocks()[0].id, "sun-1");
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_switch_to_week_view(ctx: &mut DashboardTestContext) {
        ctx.dashboard.set_view(ViewType::Week);
        assert_eq!(ctx.dashboard.label(), "Week of May 5, 2025");
        assert_eq!(ctx.dashboard.blocks().len(), 11);

        let positions = ctx.dashboard.positions();
        assert_eq!(positions["w5"].left, 40.0);
        assert_eq!(positions["w5"].width, 20.0);
        assert_eq!(ctx.dashboard.axis_labels(), vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_save_description(ctx: &mut DashboardTestContext) {
        ctx.dashboard.save_description("mon-3", "Espresso with the team");
        let block = ctx.dashboard.find("mon-3").unwrap();
        assert_eq!(block.description.as_deref(), Some("Espresso with the team"));

        let before = ctx.dashboard.blocks().to_vec();
        ctx.dashboard.save_description("nope", "ignored");
        assert_eq!(ctx.dashboard.blocks(), before.as_slice());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_edits_are_dropped_on_navigation(ctx: &mut DashboardTestContext) {
        ctx.dashboard.save_description("mon-3", "changed");
        ctx.dashboard.next();
        ctx.dashboard.previous();
        let block = ctx.dashboard.find("mon-3").unwrap();
        assert_eq!(block.description.as_deref(), Some("Coffee break"));
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_find_unknown_block(ctx: &mut DashboardTestContext) {
        match ctx.dashboard.find("mon-99") {
            Err(TimelineError::BlockNotFound(id)) => assert_eq!(id, "mon-99"),
            other => panic!("unexpected result: {:?}", other.map(|b| b.id.clone())),
        }
    }

    fn weekend_tables() -> WeekTables {
        let saturday = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let weekly = vec![
            TimeBlock::new("fri", "trw", saturday.and_hms_opt(9, 0, 0).unwrap() - Duration::days(1), saturday.and_hms_opt(10, 0, 0).unwrap() - Duration::days(1)),
            TimeBlock::new("sat", "trw", saturday.and_hms_opt(9, 0, 0).unwrap(), saturday.and_hms_opt(10, 0, 0).unwrap()),
        ];
        WeekTables::new(vec![Category::new("trw", "TRW Work", "#6BB536")], HashMap::new(), weekly)
    }

    #[test]
    fn test_hidden_weekend_blocks() {
        let clipped = Dashboard::new(Box::new(weekend_tables()), ViewConfig::default(), mock_base_date(), ViewType::Week);
        assert_eq!(clipped.hidden_weekend_blocks(), 1);
        assert_eq!(clipped.positions().len(), 1);

        let config = ViewConfig {
            weekend: WeekendPolicy::Extend,
            ..ViewConfig::default()
        };
        let extended = Dashboard::new(Box::new(weekend_tables()), config, mock_base_date(), ViewType::Week);
        assert_eq!(extended.hidden_weekend_blocks(), 0);
        assert_eq!(extended.positions().len(), 2);
        assert_eq!(extended.axis_labels().len(), 7);
    }

    #[test]
    fn test_empty_day() {
        let empty = WeekTables::new(Vec::new(), HashMap::new(), Vec::new());
        let dashboard = Dashboard::new(Box::new(empty), ViewConfig::default(), mock_base_date(), ViewType::Day);
        assert!(dashboard.blocks().is_empty());
        assert!(dashboard.positions().is_empty());
        assert_eq!(dashboard.summary().productive_percent, 0);
    }
}
