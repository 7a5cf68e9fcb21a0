#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeline::libs::block::TimeBlock;
    use timeline::libs::data_source::{mock_base_date, mock_categories, BlockSource, MockData};
    use timeline::libs::selection::{save_description, BlockDetails, EditDraft, Selection};

    fn monday() -> Vec<TimeBlock> {
        MockData::tables().blocks_for_date(mock_base_date())
    }

    #[test]
    fn test_save_description_replaces_one_block() {
        let blocks = monday();
        let updated = save_description(&blocks, "mon-2", "Wrote the literature review");

        assert_eq!(updated.len(), blocks.len());
        for (before, after) in blocks.iter().zip(&updated) {
            if before.id == "mon-2" {
                assert_eq!(after.description.as_deref(), Some("Wrote the literature review"));
                assert_eq!(after.category_id, before.category_id);
                assert_eq!(after.start_time, before.start_time);
                assert_eq!(after.end_time, before.end_time);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_save_description_leaves_input_untouched() {
        let blocks = monday();
        let snapshot = blocks.clone();
        let _ = save_description(&blocks, "mon-4", "changed");
        assert_eq!(blocks, snapshot);
    }

    #[test]
    fn test_save_description_unknown_id_is_noop() {
        let blocks = monday();
        assert_eq!(save_description(&blocks, "does-not-exist", "text"), blocks);
    }

    #[test]
    fn test_save_description_empty_text() {
        let updated = save_description(&monday(), "mon-2", "");
        let block = updated.iter().find(|b| b.id == "mon-2").unwrap();
        assert_eq!(block.description.as_deref(), Some(""));
        assert!(!block.has_description());
    }

    #[test]
    fn test_selection_resolve() {
        let blocks = monday();
        let mut selection = Selection::new();
        assert!(selection.resolve(&blocks).is_none());

        selection.select("mon-6");
        assert_eq!(selection.selected(), Some("mon-6"));
        assert_eq!(selection.resolve(&blocks).map(|b| b.category_id.as_str()), Some("trw"));

        selection.select("missing");
        assert!(selection.resolve(&blocks).is_none());

        selection.clear();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_edit_draft_submit() {
        let blocks = monday();
        let mut draft = EditDraft::open(&blocks[1]);
        assert_eq!(draft.text(), "Research paper review");
        assert!(!draft.is_dirty());

        draft.set_text("Reviewed two papers");
        assert!(draft.is_dirty());

        let block = draft.submit();
        assert_eq!(block.id, "mon-2");
        assert_eq!(block.description.as_deref(), Some("Reviewed two papers"));
    }

    #[test]
    fn test_edit_draft_cancel() {
        let blocks = monday();
        let mut draft = EditDraft::open(&blocks[1]);
        draft.set_text("discarded");
        assert_eq!(draft.cancel(), blocks[1]);
    }

    #[test]
    fn test_block_details() {
        let blocks = monday();
        let details = BlockDetails::new(&blocks[1], &mock_categories());
        assert_eq!(details.category, "University Work");
        assert_eq!(details.time_range, "9:00 AM - 10:30 AM");
        assert_eq!(details.duration, "1h 30m");
        assert_eq!(details.description.as_deref(), Some("Research paper review"));
    }

    #[test]
    fn test_block_details_unknown_category() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let block = TimeBlock::new("x", "gardening", day.and_hms_opt(13, 0, 0).unwrap(), day.and_hms_opt(13, 45, 0).unwrap());
        let details = BlockDetails::new(&block, &mock_categories());
        assert_eq!(details.category, "Idle Time");
        assert_eq!(details.time_range, "1:00 PM - 1:45 PM");
        assert_eq!(details.duration, "45m");
        assert_eq!(details.description, None);
    }
}
