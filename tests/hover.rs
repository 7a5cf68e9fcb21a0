#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use timeline::libs::hover::{HoverIntent, HoverState, HOVER_DELAY};

    #[test]
    fn test_default_delay() {
        let hover = HoverIntent::default();
        assert_eq!(hover.delay(), Duration::from_millis(300));
        assert_eq!(hover.delay(), HOVER_DELAY);
        assert_eq!(*hover.state(), HoverState::Idle);
    }

    #[test]
    fn test_enter_then_dwell_confirms() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();

        hover.pointer_enter("mon-2", start);
        assert_eq!(hover.pending(), Some("mon-2"));
        assert_eq!(hover.confirmed(), None);

        assert_eq!(hover.tick(start + Duration::from_millis(299)), None);
        assert_eq!(hover.pending(), Some("mon-2"));

        assert_eq!(hover.tick(start + Duration::from_millis(300)), Some("mon-2"));
        assert_eq!(hover.confirmed(), Some("mon-2"));
        assert_eq!(hover.pending(), None);
    }

    #[test]
    fn test_tick_after_confirmation_reports_nothing_new() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);
        hover.tick(start + HOVER_DELAY);

        assert_eq!(hover.tick(start + HOVER_DELAY * 2), None);
        assert_eq!(hover.confirmed(), Some("a"));
    }

    #[test]
    fn test_leave_before_deadline_cancels() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);
        hover.pointer_leave("a");

        assert_eq!(*hover.state(), HoverState::Idle);
        assert_eq!(hover.tick(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_leave_other_block_is_ignored() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);
        hover.pointer_leave("b");
        assert_eq!(hover.pending(), Some("a"));
    }

    #[test]
    fn test_enter_other_block_restarts_dwell() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);
        hover.pointer_enter("b", start + Duration::from_millis(200));

        assert_eq!(hover.tick(start + Duration::from_millis(350)), None);
        assert_eq!(hover.pending(), Some("b"));
        assert_eq!(hover.tick(start + Duration::from_millis(500)), Some("b"));
    }

    #[test]
    fn test_leave_confirmed_block_resets() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);
        hover.tick(start + HOVER_DELAY);
        hover.pointer_leave("a");
        assert_eq!(*hover.state(), HoverState::Idle);
    }

    #[test]
    fn test_global_check() {
        let start = Instant::now();
        let mut hover = HoverIntent::default();
        hover.pointer_enter("a", start);

        hover.pointer_check(true);
        assert_eq!(hover.pending(), Some("a"));

        hover.pointer_check(false);
        assert_eq!(*hover.state(), HoverState::Idle);
    }

    #[test]
    fn test_custom_delay() {
        let start = Instant::now();
        let mut hover = HoverIntent::new(Duration::from_millis(50));
        hover.pointer_enter("a", start);
        assert_eq!(hover.tick(start + Duration::from_millis(50)), Some("a"));
    }
}
