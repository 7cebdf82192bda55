use std::fmt;
use std::str::FromStr;

use crate::log::LogRecord;
use super::matcher::{match_string_filter, StringMatcher};

/// A single string filter entry
#[derive(Debug, Clone)]
pub struct FilterCriterion {
    use_glob: bool,
    matcher: StringMatcher,
}

impl FilterCriterion {
    pub fn new(pattern: impl Into<String>, use_case: bool, use_glob: bool, invert: bool) -> Self {
        let pattern = pattern.into();
        Self {
            use_glob,
            matcher: StringMatcher::new(&pattern, use_case, use_glob, invert),
        }
    }

    /// Entry as created from a selected record: case-sensitive literal with
    /// inverted matching.
    pub fn from_record_field(pattern: impl Into<String>) -> Self {
        Self::new(pattern, true, false, true)
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    pub fn use_case(&self) -> bool {
        self.matcher.use_case()
    }

    pub fn use_glob(&self) -> bool {
        self.use_glob
    }

    pub fn invert(&self) -> bool {
        self.matcher.invert()
    }

    /// Whether `target` satisfies this entry (inversion applied)
    pub fn matches(&self, target: &str) -> bool {
        self.matcher.is_match(target)
    }

    /// Whether a new pattern is already covered by this entry.
    /// Uses this entry's case/glob settings and ignores its inversion.
    pub fn covers(&self, pattern: &str) -> bool {
        match_string_filter(self.pattern(), pattern, self.use_case(), self.use_glob, false)
    }
}

/// The free-text search applied to record messages
#[derive(Debug, Clone)]
pub struct SearchFilter {
    criterion: FilterCriterion,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::new("", false, false, false)
    }
}

impl SearchFilter {
    pub fn new(pattern: impl Into<String>, use_case: bool, use_glob: bool, invert: bool) -> Self {
        Self {
            criterion: FilterCriterion::new(pattern, use_case, use_glob, invert),
        }
    }

    /// Replace the pattern, keeping the current modifiers
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.criterion = FilterCriterion::new(
            pattern,
            self.criterion.use_case(),
            self.criterion.use_glob(),
            self.criterion.invert(),
        );
    }

    pub fn criterion(&self) -> &FilterCriterion {
        &self.criterion
    }

    pub fn pattern(&self) -> &str {
        self.criterion.pattern()
    }

    pub fn is_active(&self) -> bool {
        !self.criterion.pattern().is_empty()
    }

    pub fn matches(&self, message: &str) -> bool {
        self.criterion.matches(message)
    }
}

/// Record field a filter list applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterCategory {
    LogType,
    Function,
    FileLine,
}

impl FilterCategory {
    /// Evaluation order used by the visibility check
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::LogType,
        FilterCategory::Function,
        FilterCategory::FileLine,
    ];

    fn slot(self) -> usize {
        match self {
            FilterCategory::LogType => 0,
            FilterCategory::Function => 1,
            FilterCategory::FileLine => 2,
        }
    }

    /// The record field this category filters on
    pub fn field(self, record: &LogRecord) -> &str {
        match self {
            FilterCategory::LogType => &record.type_identifier,
            FilterCategory::Function => &record.function,
            FilterCategory::FileLine => &record.file_line,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::LogType => "type",
            FilterCategory::Function => "function",
            FilterCategory::FileLine => "file",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" | "log-type" => Ok(FilterCategory::LogType),
            "function" | "fn" => Ok(FilterCategory::Function),
            "file" | "file-line" => Ok(FilterCategory::FileLine),
            _ => Err(format!("Unknown filter category: {}", s)),
        }
    }
}

/// Filter entries of one category plus its enable flag
#[derive(Debug, Clone, Default)]
pub struct CategoryFilters {
    pub enabled: bool,
    entries: Vec<FilterCriterion>,
}

impl CategoryFilters {
    pub fn entries(&self) -> &[FilterCriterion] {
        &self.entries
    }

    pub fn push(&mut self, criterion: FilterCriterion) {
        self.entries.push(criterion);
    }

    /// First existing entry that already covers `pattern`
    pub fn find_duplicate(&self, pattern: &str) -> Option<&FilterCriterion> {
        self.entries.iter().find(|entry| entry.covers(pattern))
    }

    /// Whether a field value passes this category.
    /// Disabled categories pass everything; enabled ones require every entry to match.
    pub fn passes(&self, field: &str) -> bool {
        !self.enabled || self.entries.iter().all(|entry| entry.matches(field))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-category filter lists
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    categories: [CategoryFilters; 3],
}

impl FilterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: FilterCategory) -> &CategoryFilters {
        &self.categories[category.slot()]
    }

    pub fn get_mut(&mut self, category: FilterCategory) -> &mut CategoryFilters {
        &mut self.categories[category.slot()]
    }

    /// Categories in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (FilterCategory, &CategoryFilters)> + '_ {
        FilterCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn set_enabled(&mut self, category: FilterCategory, enabled: bool) {
        self.get_mut(category).enabled = enabled;
    }

    /// Whether a record passes every enabled category
    pub fn passes(&self, record: &LogRecord) -> bool {
        self.iter().all(|(category, filters)| filters.passes(category.field(record)))
    }

    pub fn filter_count(&self) -> usize {
        self.categories.iter().map(|c| c.len()).sum()
    }
}
