use std::collections::HashSet;

use crate::log::{LogRecord, RecordId, RecordStore};

/// Selection state for the record viewer.
///
/// Kept apart from the records themselves: the store owns the records, the
/// view owns which of them are selected and which one is active.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<RecordId>,
    /// Record most recently picked; anchors range selection
    active: Option<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_record_selected(&self, record: &LogRecord) -> bool {
        self.is_selected(record.id)
    }

    pub fn select(&mut self, id: RecordId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: RecordId) {
        self.selected.remove(&id);
    }

    pub fn set_selected(&mut self, id: RecordId, selected: bool) {
        if selected {
            self.select(id);
        } else {
            self.deselect(id);
        }
    }

    pub fn toggle(&mut self, id: RecordId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn active(&self) -> Option<RecordId> {
        self.active
    }

    pub fn set_active(&mut self, id: Option<RecordId>) {
        self.active = id;
    }

    /// Sequence position of the active record, if it is still in the store
    pub fn active_index(&self, store: &RecordStore) -> Option<usize> {
        self.active.and_then(|id| store.position(id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in no particular order
    pub fn selected_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }

    /// Drop ids whose records are no longer in the store
    pub fn retain_existing(&mut self, store: &RecordStore) {
        let existing: HashSet<RecordId> = store.iter().map(|r| r.id).collect();
        self.selected.retain(|id| existing.contains(id));
        if self.active.is_some_and(|id| !existing.contains(&id)) {
            self.active = None;
        }
    }

    /// Forget all selected ids and the active record
    pub fn clear(&mut self) {
        self.selected.clear();
        self.active = None;
    }
}
