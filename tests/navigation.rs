#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeline::libs::block::ViewType;
    use timeline::libs::navigation::Navigator;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    #[test]
    fn test_day_steps() {
        let mut nav = Navigator::new(date(5), ViewType::Day);
        nav.next();
        assert_eq!(nav.date(), date(6));
        nav.previous();
        nav.previous();
        assert_eq!(nav.date(), date(4));
    }

    #[test]
    fn test_week_steps() {
        let mut nav = Navigator::new(date(7), ViewType::Week);
        nav.next();
        assert_eq!(nav.date(), date(14));
        assert_eq!(nav.label(), "Week of May 12, 2025");
        nav.previous();
        assert_eq!(nav.label(), "Week of May 5, 2025");
    }

    #[test]
    fn test_labels() {
        let mut nav = Navigator::new(date(5), ViewType::Day);
        assert_eq!(nav.label(), "Monday, May 5, 2025");

        nav.set_view(ViewType::Week);
        assert_eq!(nav.view(), ViewType::Week);
        assert_eq!(nav.label(), "Week of May 5, 2025");

        nav.set_date(date(31));
        nav.set_view(ViewType::Day);
        assert_eq!(nav.label(), "Saturday, May 31, 2025");
    }
}
