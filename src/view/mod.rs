pub mod filter;
pub mod matcher;
pub mod selection;
pub mod severity;
pub mod visibility;

pub use filter::{CategoryFilters, FilterCategory, FilterCriterion, FilterTable, SearchFilter};
pub use matcher::{match_string_filter, StringMatcher};
pub use selection::Selection;
pub use severity::SeverityMask;
pub use visibility::ViewFilters;

use crate::log::{format_record, LogRecord, RecordFormat, RecordStore};

/// State owned by one record viewer: what is shown and what is selected
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filters: ViewFilters,
    pub selection: Selection,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: ViewFilters) -> Self {
        Self {
            filters,
            selection: Selection::new(),
        }
    }

    pub fn is_visible(&self, record: &LogRecord) -> bool {
        self.filters.is_visible(record)
    }

    /// Whether a record is both shown and selected
    pub fn is_visible_selected(&self, record: &LogRecord) -> bool {
        self.selection.is_record_selected(record) && self.filters.is_visible(record)
    }

    /// Visible and selected records in sequence order
    pub fn visible_selected<'a>(
        &'a self,
        store: &'a RecordStore,
    ) -> impl Iterator<Item = &'a LogRecord> + 'a {
        store.iter().filter(move |record| self.is_visible_selected(record))
    }

    /// Render the visible records, one row each.
    ///
    /// Rows start with two marker columns: `>` for the active record and `*`
    /// for a selected one.
    pub fn render(&self, store: &RecordStore, format: RecordFormat) -> String {
        let active = self.selection.active();
        let mut out = String::new();
        for (_, record) in self.filters.visible(store) {
            out.push(if active == Some(record.id) { '>' } else { ' ' });
            out.push(if self.selection.is_record_selected(record) { '*' } else { ' ' });
            out.push(' ');
            out.push_str(&format_record(record, format));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Severity;

    #[test]
    fn test_render_marks_active_and_selected_rows() {
        let store = RecordStore::from_records(vec![
            LogRecord::new(Severity::Info, "one"),
            LogRecord::new(Severity::Debug, "two"),
            LogRecord::new(Severity::Warn, "three"),
        ]);
        let mut view = ViewState::new();
        view.selection.select(store.get(0).unwrap().id);
        view.selection.set_active(Some(store.get(2).unwrap().id));
        view.filters.severity_mask.set_severity(Severity::Debug, false);

        assert_eq!(
            view.render(&store, RecordFormat::default()),
            " * INFO: one\n>  WARN: three\n"
        );
    }
}
