use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod file;
pub mod format;
pub mod store;

pub use file::load_records;
pub use format::{format_record, RecordFormat};
pub use store::RecordStore;

/// Stable identity of a record inside a [`RecordStore`].
///
/// Ids are assigned on push and never reused, so they stay valid while other
/// records are appended or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Verbose,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "verbose" => Ok(Severity::Verbose),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A single log record as produced by the logging backend
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Identity assigned by the store; `RecordId::default()` until pushed
    pub id: RecordId,
    pub severity: Severity,
    /// Verbosity level, lower is more important
    pub verbosity: u32,
    pub message: String,
    /// Name of the function that emitted the record
    pub function: String,
    /// Source location in `path:line` form
    pub file_line: String,
    /// Identifier of the log type (e.g. `wm.operator`)
    pub type_identifier: String,
    pub timestamp: Option<DateTime<Local>>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            severity,
            verbosity: 0,
            message: message.into(),
            function: String::new(),
            file_line: String::new(),
            type_identifier: String::new(),
            timestamp: None,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u32) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    pub fn with_file_line(mut self, file_line: impl Into<String>) -> Self {
        self.file_line = file_line.into();
        self
    }

    pub fn with_type(mut self, type_identifier: impl Into<String>) -> Self {
        self.type_identifier = type_identifier.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// File name part of `file_line`, line number included (`foo.c:42`)
    pub fn file_basename(&self) -> &str {
        path_basename(&self.file_line)
    }
}

/// Everything after the last path separator.
pub fn path_basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
