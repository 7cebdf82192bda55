use std::str::FromStr;

use tracing::{debug, info};

use crate::host::Host;
use crate::log::{LogRecord, RecordStore};
use crate::view::{FilterCategory, FilterCriterion, ViewState};
use super::Outcome;

/// Which record field a new filter is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMethod {
    Function,
    /// File name without the line number
    File,
    /// File name with the line number
    Line,
    LogType,
}

impl FilterMethod {
    /// The filter list entries of this method are added to
    pub fn category(self) -> FilterCategory {
        match self {
            FilterMethod::Function => FilterCategory::Function,
            FilterMethod::File | FilterMethod::Line => FilterCategory::FileLine,
            FilterMethod::LogType => FilterCategory::LogType,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FilterMethod::Function => "Function",
            FilterMethod::File => "File",
            FilterMethod::Line => "Line",
            FilterMethod::LogType => "Log type",
        }
    }

    /// Filter pattern derived from a record
    pub fn pattern_for(self, record: &LogRecord) -> String {
        match self {
            FilterMethod::Function => record.function.clone(),
            FilterMethod::File => strip_line_number(record.file_basename()).to_string(),
            FilterMethod::Line => record.file_basename().to_string(),
            FilterMethod::LogType => record.type_identifier.clone(),
        }
    }
}

impl FromStr for FilterMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "function" | "fn" => Ok(FilterMethod::Function),
            "file" => Ok(FilterMethod::File),
            "line" => Ok(FilterMethod::Line),
            "type" | "log-type" => Ok(FilterMethod::LogType),
            _ => Err(format!("Unknown filter method: {}", s)),
        }
    }
}

/// `foo.c:42` -> `foo.c`
fn strip_line_number(basename: &str) -> &str {
    debug_assert!(
        basename.contains(':'),
        "file_line without line number: {:?}",
        basename
    );
    match basename.rfind(':') {
        Some(pos) => &basename[..pos],
        None => basename,
    }
}

/// Add filters built from the visible, selected records.
///
/// The qualifying records are taken at the start, so several records may each
/// add an entry in one call. Patterns already covered by an entry of the target
/// list are skipped with a notice.
pub fn add_filters_from_selection(
    view: &mut ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    method: FilterMethod,
) -> Outcome {
    let patterns: Vec<String> = view
        .visible_selected(store)
        .map(|record| method.pattern_for(record))
        .collect();

    let category = method.category();
    let target = view.filters.categories.get_mut(category);
    let mut added = 0;

    for pattern in patterns {
        if let Some(existing) = target.find_duplicate(&pattern) {
            let notice = format!(
                "{} filter: {} is duplicate of filter: {}",
                method.label(),
                pattern,
                existing.pattern()
            );
            info!(%category, %pattern, "skipped duplicate filter");
            host.report_info(&notice);
            continue;
        }

        debug!(%category, %pattern, "added filter");
        target.push(FilterCriterion::from_record_field(pattern));
        target.enabled = true;
        added += 1;
    }

    debug!(%category, added, total = target.len(), "filters from selection");
    host.request_redraw();
    Outcome::Finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use crate::log::Severity;
    use crate::operations::select::{select_all, select_pick, PickParams, SelectAction};

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            LogRecord::new(Severity::Info, "read")
                .with_function("wm_file_read")
                .with_file_line("source/wm/wm_files.c:120")
                .with_type("wm.files"),
            LogRecord::new(Severity::Warn, "write")
                .with_function("wm_file_write")
                .with_file_line("source/wm/wm_files.c:300")
                .with_type("wm.files"),
            LogRecord::new(Severity::Error, "draw")
                .with_function("gpu_draw")
                .with_file_line("source/gpu/gpu_draw.c:17")
                .with_type("gpu"),
        ])
    }

    fn patterns(view: &ViewState, category: FilterCategory) -> Vec<String> {
        view.filters
            .categories
            .get(category)
            .entries()
            .iter()
            .map(|e| e.pattern().to_string())
            .collect()
    }

    #[test]
    fn test_pattern_for_each_method() {
        let store = store();
        let record = store.get(0).unwrap();

        assert_eq!(FilterMethod::Function.pattern_for(record), "wm_file_read");
        assert_eq!(FilterMethod::File.pattern_for(record), "wm_files.c");
        assert_eq!(FilterMethod::Line.pattern_for(record), "wm_files.c:120");
        assert_eq!(FilterMethod::LogType.pattern_for(record), "wm.files");
    }

    #[test]
    fn test_file_and_line_share_a_category() {
        assert_eq!(FilterMethod::File.category(), FilterCategory::FileLine);
        assert_eq!(FilterMethod::Line.category(), FilterCategory::FileLine);
    }

    #[test]
    fn test_function_filter_hides_selected_records() {
        let store = store();
        let mut view = ViewState::new();
        let mut host = HeadlessHost::new();
        select_pick(&mut view, &store, &mut host, PickParams::at(0));

        let outcome = add_filters_from_selection(&mut view, &store, &mut host, FilterMethod::Function);

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(patterns(&view, FilterCategory::Function), vec!["wm_file_read"]);
        let entry = &view.filters.categories.get(FilterCategory::Function).entries()[0];
        assert!(entry.use_case() && entry.invert() && !entry.use_glob());
        assert!(view.filters.categories.get(FilterCategory::Function).enabled);

        assert!(!view.is_visible(store.get(0).unwrap()));
        assert!(view.is_visible(store.get(1).unwrap()));
        assert!(host.notices.is_empty());
    }

    #[test]
    fn test_duplicate_in_one_call_reports_once() {
        let store = store();
        let mut view = ViewState::new();
        let mut host = HeadlessHost::new();
        select_pick(&mut view, &store, &mut host, PickParams::at(0));
        select_pick(&mut view, &store, &mut host, PickParams::at(1));

        add_filters_from_selection(&mut view, &store, &mut host, FilterMethod::File);

        assert_eq!(patterns(&view, FilterCategory::FileLine), vec!["wm_files.c"]);
        assert_eq!(host.notices, vec!["File filter: wm_files.c is duplicate of filter: wm_files.c"]);
    }

    #[test]
    fn test_existing_pattern_covers_longer_one() {
        let store = store();
        let mut view = ViewState::new();
        let mut host = HeadlessHost::new();
        view.filters
            .categories
            .get_mut(FilterCategory::FileLine)
            .push(FilterCriterion::new("wm_files", true, false, false));
        select_pick(&mut view, &store, &mut host, PickParams::at(0));

        add_filters_from_selection(&mut view, &store, &mut host, FilterMethod::Line);

        assert_eq!(view.filters.categories.get(FilterCategory::FileLine).len(), 1);
        assert_eq!(
            host.last_notice(),
            Some("Line filter: wm_files.c:120 is duplicate of filter: wm_files")
        );
    }

    #[test]
    fn test_only_visible_selected_records_contribute() {
        let store = store();
        let mut view = ViewState::new();
        let mut host = HeadlessHost::new();
        select_all(&mut view, &store, &mut host, SelectAction::Select);
        view.filters.severity_mask.set_severity(Severity::Error, false);

        add_filters_from_selection(&mut view, &store, &mut host, FilterMethod::LogType);

        // gpu record is hidden, the two wm records share a type
        assert_eq!(patterns(&view, FilterCategory::LogType), vec!["wm.files"]);
        assert_eq!(host.notices.len(), 1);
    }

    #[test]
    fn test_nothing_selected_adds_nothing() {
        let store = store();
        let mut view = ViewState::new();
        let mut host = HeadlessHost::new();

        let outcome = add_filters_from_selection(&mut view, &store, &mut host, FilterMethod::Function);

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(view.filters.categories.filter_count(), 0);
        assert!(!view.filters.categories.get(FilterCategory::Function).enabled);
    }

    #[test]
    fn test_strip_line_number_uses_last_colon() {
        assert_eq!(strip_line_number("C:foo.c:12"), "C:foo.c");
        assert_eq!(strip_line_number("main.c:1"), "main.c");
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("line".parse::<FilterMethod>(), Ok(FilterMethod::Line));
        assert_eq!("type".parse::<FilterMethod>(), Ok(FilterMethod::LogType));
        assert!("path".parse::<FilterMethod>().is_err());
    }
}
