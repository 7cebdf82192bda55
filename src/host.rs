use anyhow::{bail, Result};

use crate::log::RecordStore;
use crate::view::ViewFilters;

/// Capabilities the embedding application provides to the viewer operations
pub trait Host {
    /// Resolve a vertical screen position to a record's sequence position.
    /// Returns None when no record is drawn at that row.
    fn pick_record_at_row(&self, y: i32) -> Option<usize>;

    /// Show a non-fatal informational notice to the user
    fn report_info(&mut self, message: &str);

    /// The view needs to be repainted
    fn request_redraw(&mut self);

    fn set_clipboard_text(&mut self, text: &str) -> Result<()>;
}

/// Host without a screen: rows are laid out one record per line, top to bottom,
/// and notices and clipboard text are kept in memory.
#[derive(Debug)]
pub struct HeadlessHost {
    /// Row `y` shows the record at `rows[y]`
    rows: Vec<usize>,
    pub notices: Vec<String>,
    pub clipboard: Option<String>,
    pub redraw_requests: usize,
    /// When false, clipboard writes fail
    pub clipboard_available: bool,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            notices: Vec::new(),
            clipboard: None,
            redraw_requests: 0,
            clipboard_available: true,
        }
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the currently visible records, one per row
    pub fn layout(&mut self, filters: &ViewFilters, store: &RecordStore) {
        self.rows = filters.visible(store).map(|(index, _)| index).collect();
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(|s| s.as_str())
    }
}

impl Host for HeadlessHost {
    fn pick_record_at_row(&self, y: i32) -> Option<usize> {
        usize::try_from(y).ok().and_then(|row| self.rows.get(row).copied())
    }

    fn report_info(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<()> {
        if !self.clipboard_available {
            bail!("clipboard unavailable");
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
