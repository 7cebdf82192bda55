use super::{LogRecord, RecordStore, Severity};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One line of a JSON-lines record dump
#[derive(Debug, Deserialize)]
struct RecordLine {
    severity: Severity,
    #[serde(default)]
    verbosity: u32,
    message: String,
    #[serde(default)]
    function: String,
    #[serde(default)]
    file_line: String,
    #[serde(default, rename = "type")]
    type_identifier: String,
    /// RFC 3339 timestamp
    #[serde(default)]
    timestamp: Option<String>,
}

impl RecordLine {
    fn into_record(self) -> Result<LogRecord> {
        let mut record = LogRecord::new(self.severity, self.message)
            .with_verbosity(self.verbosity)
            .with_function(self.function)
            .with_file_line(self.file_line)
            .with_type(self.type_identifier);
        if let Some(ts) = self.timestamp {
            let parsed = DateTime::parse_from_rfc3339(&ts)
                .with_context(|| format!("Invalid timestamp '{}'", ts))?;
            record.timestamp = Some(parsed.with_timezone(&Local));
        }
        Ok(record)
    }
}

/// Parse records from JSON-lines text. Blank lines are skipped.
pub fn parse_records(content: impl BufRead) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: RecordLine = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse record on line {}", line_no + 1))?;
        let record = parsed
            .into_record()
            .with_context(|| format!("Invalid record on line {}", line_no + 1))?;
        store.push(record);
    }
    Ok(store)
}

/// Load a JSON-lines record dump from disk into a fresh store
pub fn load_records(path: &Path) -> Result<RecordStore> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open records file '{}'", path.display()))?;
    let store = parse_records(BufReader::new(file))?;
    debug!(path = %path.display(), count = store.len(), "loaded log records");
    Ok(store)
}
