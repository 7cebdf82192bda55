use std::str::FromStr;

use tracing::{debug, warn};

use crate::host::Host;
use crate::log::{format_record, LogRecord, RecordFormat, RecordStore};
use crate::view::ViewState;
use super::Outcome;

/// What to copy from each selected record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMethod {
    /// The row as shown in the viewer
    #[default]
    Visible,
    Message,
    /// Full `path:line`
    Path,
    /// `file:line` without directories
    Basename,
}

impl CopyMethod {
    fn render(self, record: &LogRecord, format: RecordFormat) -> String {
        match self {
            CopyMethod::Visible => format_record(record, format),
            CopyMethod::Message => record.message.clone(),
            CopyMethod::Path => record.file_line.clone(),
            CopyMethod::Basename => record.file_basename().to_string(),
        }
    }
}

impl FromStr for CopyMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visible" => Ok(CopyMethod::Visible),
            "message" => Ok(CopyMethod::Message),
            "path" => Ok(CopyMethod::Path),
            "basename" => Ok(CopyMethod::Basename),
            _ => Err(format!("Unknown copy method: {}", s)),
        }
    }
}

/// Text for the visible, selected records: one line per record, each ending in `\n`
pub fn selection_text(
    view: &ViewState,
    store: &RecordStore,
    method: CopyMethod,
    format: RecordFormat,
) -> String {
    let mut text = String::new();
    for record in view.visible_selected(store) {
        text.push_str(&method.render(record, format));
        text.push('\n');
    }
    text
}

/// Copy the visible, selected records to the clipboard
pub fn copy_selection(
    view: &ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    method: CopyMethod,
    format: RecordFormat,
) -> Outcome {
    let text = selection_text(view, store, method, format);
    let lines = text.lines().count();

    match host.set_clipboard_text(&text) {
        Ok(()) => {
            debug!(?method, lines, "copied selection to clipboard");
            Outcome::Finished
        }
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            host.report_info(&format!("Failed to copy: {}", e));
            Outcome::Cancelled
        }
    }
}
