use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::log::{RecordFormat, Severity};
use crate::view::{SearchFilter, SeverityMask, ViewFilters, ViewState};

/// Initial message search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub pattern: String,
    #[serde(default)]
    pub use_case: bool,
    #[serde(default)]
    pub use_glob: bool,
    #[serde(default)]
    pub invert: bool,
}

/// Initial viewer settings, read from `.clogview.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Severities shown when the viewer opens
    #[serde(default = "default_severities")]
    pub severities: Vec<Severity>,
    /// Verbosity cutoff; unset means no cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_filter: Option<u32>,
    /// Prefix copied and printed rows with the record time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_timestamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    // This field is not serialized, just used at runtime
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

fn default_severities() -> Vec<Severity> {
    Severity::ALL.to_vec()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            severities: default_severities(),
            level_filter: None,
            show_timestamp: None,
            search: None,
            config_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path))?;
        let mut config: ViewerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config '{}'", path))?;
        config.config_path = Some(PathBuf::from(path));
        Ok(config)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn severity_mask(&self) -> SeverityMask {
        self.severities.iter().copied().collect()
    }

    pub fn record_format(&self) -> RecordFormat {
        RecordFormat {
            show_timestamp: self.show_timestamp.unwrap_or(false),
        }
    }

    /// View state the viewer starts with: configured filters, empty selection
    pub fn initial_view(&self) -> ViewState {
        ViewState::with_filters(ViewFilters {
            severity_mask: self.severity_mask(),
            level_filter: self.level_filter,
            search: self
                .search
                .as_ref()
                .map(|s| SearchFilter::new(s.pattern.clone(), s.use_case, s.use_glob, s.invert))
                .unwrap_or_default(),
            ..ViewFilters::default()
        })
    }
}
