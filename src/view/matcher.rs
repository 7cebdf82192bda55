use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

/// Test one target string against a filter pattern.
///
/// * empty pattern matches everything, `invert` included
/// * `use_glob` matches the whole target against a shell glob (`*`, `?`, `[..]`)
/// * otherwise the pattern is a literal substring
/// * `use_case` selects case-sensitive comparison
/// * `invert` negates the result
pub fn match_string_filter(
    pattern: &str,
    target: &str,
    use_case: bool,
    use_glob: bool,
    invert: bool,
) -> bool {
    StringMatcher::new(pattern, use_case, use_glob, invert).is_match(target)
}

/// Pre-compiled form of [`match_string_filter`] for patterns tested against many records
#[derive(Debug, Clone)]
pub struct StringMatcher {
    pattern: String,
    /// Pre-computed lowercase pattern for case-insensitive matching
    pattern_lowercase: String,
    use_case: bool,
    invert: bool,
    mode: MatchMode,
}

#[derive(Debug, Clone)]
enum MatchMode {
    Substring,
    Glob(GlobMatcher),
    /// Glob that failed to compile; compared as a whole literal string
    Exact,
}

impl StringMatcher {
    pub fn new(pattern: &str, use_case: bool, use_glob: bool, invert: bool) -> Self {
        let mode = if use_glob {
            GlobBuilder::new(pattern)
                .case_insensitive(!use_case)
                .literal_separator(false)
                .build()
                .map(|glob| MatchMode::Glob(glob.compile_matcher()))
                .unwrap_or(MatchMode::Exact)
        } else {
            MatchMode::Substring
        };

        Self {
            pattern: pattern.to_string(),
            pattern_lowercase: pattern.to_lowercase(),
            use_case,
            invert,
            mode,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn use_case(&self) -> bool {
        self.use_case
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn is_match(&self, target: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }

        let matched = match &self.mode {
            MatchMode::Glob(glob) => glob.is_match(Path::new(target)),
            MatchMode::Substring if self.use_case => target.contains(&self.pattern),
            MatchMode::Substring => target.to_lowercase().contains(&self.pattern_lowercase),
            MatchMode::Exact if self.use_case => target == self.pattern,
            MatchMode::Exact => target.to_lowercase() == self.pattern_lowercase,
        };

        matched != self.invert
    }
}
