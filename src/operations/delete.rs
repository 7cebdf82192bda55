use tracing::debug;

use crate::host::Host;
use crate::log::RecordStore;
use crate::view::ViewState;
use super::Outcome;

/// Remove the visible, selected records from the store.
///
/// Removed ids leave the selection, and the active record is cleared when it
/// was one of them. Remaining records keep their order and ids.
pub fn delete_selection(
    view: &mut ViewState,
    store: &mut RecordStore,
    host: &mut dyn Host,
) -> Outcome {
    let removed = store.remove_where(|record| view.is_visible_selected(record));

    view.selection.retain_existing(store);

    debug!(removed = removed.len(), remaining = store.len(), "deleted selected records");
    match removed.len() {
        0 => {}
        1 => host.report_info("Deleted 1 log record"),
        n => host.report_info(&format!("Deleted {} log records", n)),
    }
    host.request_redraw();
    Outcome::Finished
}
