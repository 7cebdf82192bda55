use super::LogRecord;

/// Options controlling how a record is rendered as a single text row
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormat {
    /// Prefix the row with the record's `HH:MM:SS.mmm` timestamp when it has one
    pub show_timestamp: bool,
}

/// Render a record the way it appears in the viewer.
///
/// Example:
///   `12:00:01.250 ERROR (wm.operator): wm_files.c:120 wm_file_read: File not found`
pub fn format_record(record: &LogRecord, format: RecordFormat) -> String {
    let mut row = String::with_capacity(
        record.message.len() + record.file_line.len() + record.function.len() + 32,
    );

    if format.show_timestamp {
        if let Some(ts) = record.timestamp {
            row.push_str(&ts.format("%H:%M:%S%.3f").to_string());
            row.push(' ');
        }
    }

    row.push_str(record.severity.as_str());
    if !record.type_identifier.is_empty() {
        row.push_str(" (");
        row.push_str(&record.type_identifier);
        row.push(')');
    }
    row.push(':');

    // Source location uses the short file name, the full path is available via copy
    let basename = record.file_basename();
    if !basename.is_empty() {
        row.push(' ');
        row.push_str(basename);
    }
    if !record.function.is_empty() {
        row.push(' ');
        row.push_str(&record.function);
        row.push(':');
    }

    row.push(' ');
    row.push_str(&record.message);
    row
}
