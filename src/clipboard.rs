use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("System clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    debug!(bytes = text.len(), "wrote system clipboard");
    Ok(())
}
