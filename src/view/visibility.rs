use crate::log::{LogRecord, RecordStore};
use super::filter::{FilterTable, SearchFilter};
use super::severity::SeverityMask;

/// Every criterion that decides whether a record is shown
#[derive(Debug, Clone, Default)]
pub struct ViewFilters {
    pub severity_mask: SeverityMask,
    pub search: SearchFilter,
    /// Verbosity cutoff; records above this level are hidden
    pub level_filter: Option<u32>,
    pub categories: FilterTable,
}

impl ViewFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record passes every active filter.
    ///
    /// Checks run cheapest-first and stop at the first failure: search text,
    /// severity, verbosity, then the per-category lists.
    pub fn is_visible(&self, record: &LogRecord) -> bool {
        if !self.search.matches(&record.message) {
            return false;
        }

        if !self.severity_mask.shows(record.severity) {
            return false;
        }

        if let Some(level) = self.level_filter {
            if level < record.verbosity {
                return false;
            }
        }

        self.categories.passes(record)
    }

    /// Visible records paired with their sequence position
    pub fn visible<'a>(
        &'a self,
        store: &'a RecordStore,
    ) -> impl DoubleEndedIterator<Item = (usize, &'a LogRecord)> + 'a {
        store
            .iter()
            .enumerate()
            .filter(move |(_, record)| self.is_visible(record))
    }

    pub fn first_visible(&self, store: &RecordStore) -> Option<usize> {
        self.visible(store).next().map(|(index, _)| index)
    }

    pub fn last_visible(&self, store: &RecordStore) -> Option<usize> {
        self.visible(store).next_back().map(|(index, _)| index)
    }

    pub fn visible_count(&self, store: &RecordStore) -> usize {
        self.visible(store).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Severity;
    use crate::view::filter::{FilterCategory, FilterCriterion};

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            LogRecord::new(Severity::Debug, "debug detail").with_verbosity(3),
            LogRecord::new(Severity::Info, "file loaded")
                .with_function("wm_file_read")
                .with_file_line("wm/wm_files.c:120"),
            LogRecord::new(Severity::Warn, "slow redraw").with_type("gpu.draw"),
            LogRecord::new(Severity::Error, "file not found")
                .with_function("wm_file_read")
                .with_file_line("wm/wm_files.c:200"),
        ])
    }

    fn visible_messages(filters: &ViewFilters, store: &RecordStore) -> Vec<String> {
        filters.visible(store).map(|(_, r)| r.message.clone()).collect()
    }

    #[test]
    fn test_default_filters_show_everything() {
        let store = store();
        assert_eq!(ViewFilters::new().visible_count(&store), 4);
    }

    #[test]
    fn test_search_filter_on_message() {
        let store = store();
        let mut filters = ViewFilters::new();
        filters.search = SearchFilter::new("file", false, false, false);

        assert_eq!(visible_messages(&filters, &store), vec!["file loaded", "file not found"]);
    }

    #[test]
    fn test_inverted_search() {
        let store = store();
        let mut filters = ViewFilters::new();
        filters.search = SearchFilter::new("file", false, false, true);

        assert_eq!(visible_messages(&filters, &store), vec!["debug detail", "slow redraw"]);
    }

    #[test]
    fn test_severity_bit_hides_exactly_that_severity() {
        let store = store();
        let mut filters = ViewFilters::new();

        for severity in [Severity::Debug, Severity::Info, Severity::Warn, Severity::Error] {
            filters.severity_mask = SeverityMask::all();
            filters.severity_mask.set_severity(severity, false);

            for record in store.iter() {
                assert_eq!(filters.is_visible(record), record.severity != severity);
            }
        }
    }

    #[test]
    fn test_level_filter_hides_more_verbose_records() {
        let store = store();
        let mut filters = ViewFilters::new();
        filters.level_filter = Some(2);

        assert_eq!(filters.visible_count(&store), 3);
        assert!(!filters.is_visible(store.get(0).unwrap()));

        filters.level_filter = Some(3);
        assert!(filters.is_visible(store.get(0).unwrap()));
    }

    #[test]
    fn test_category_filter_only_when_enabled() {
        let store = store();
        let mut filters = ViewFilters::new();
        filters
            .categories
            .get_mut(FilterCategory::FileLine)
            .push(FilterCriterion::from_record_field("wm_files.c"));

        assert_eq!(filters.visible_count(&store), 4);

        filters.categories.set_enabled(FilterCategory::FileLine, true);
        assert_eq!(visible_messages(&filters, &store), vec!["debug detail", "slow redraw"]);
    }

    #[test]
    fn test_non_inverted_category_entry_keeps_only_matches() {
        let store = store();
        let mut filters = ViewFilters::new();
        let types = filters.categories.get_mut(FilterCategory::LogType);
        types.push(FilterCriterion::new("gpu.*", true, true, false));
        types.enabled = true;

        assert_eq!(visible_messages(&filters, &store), vec!["slow redraw"]);
    }

    #[test]
    fn test_is_visible_is_pure() {
        let store = store();
        let mut filters = ViewFilters::new();
        filters.search = SearchFilter::new("*o*", false, true, false);
        filters.level_filter = Some(1);

        for record in store.iter() {
            assert_eq!(filters.is_visible(record), filters.is_visible(record));
        }
    }

    #[test]
    fn test_first_and_last_visible() {
        let store = store();
        let mut filters = ViewFilters::new();
        assert_eq!(filters.first_visible(&store), Some(0));
        assert_eq!(filters.last_visible(&store), Some(3));

        filters.severity_mask.set_severity(Severity::Debug, false);
        filters.severity_mask.set_severity(Severity::Error, false);
        assert_eq!(filters.first_visible(&store), Some(1));
        assert_eq!(filters.last_visible(&store), Some(2));

        filters.severity_mask = SeverityMask::empty();
        assert_eq!(filters.first_visible(&store), None);
    }
}
