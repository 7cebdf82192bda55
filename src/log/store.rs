use super::{LogRecord, RecordId};
use tracing::debug;

/// Ordered, append-only arena of log records.
///
/// Positions are stable until records are removed. Every record gets a
/// [`RecordId`] on push that survives removals of other records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store from records in sequence order
    pub fn from_records(records: impl IntoIterator<Item = LogRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.push(record);
        }
        store
    }

    /// Append a record, assigning it a fresh id
    pub fn push(&mut self, mut record: LogRecord) -> RecordId {
        // A default-constructed store starts at zero, which is the "unassigned" id
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = RecordId(self.next_id);
        self.next_id += 1;
        record.id = id;
        self.records.push(record);
        id
    }

    /// Record at a sequence position
    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    /// Sequence position of a record id
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record matching the predicate, returning the removed ones
    /// in sequence order. Remaining records keep their order and ids.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&LogRecord) -> bool) -> Vec<LogRecord> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if predicate(&record) {
                removed.push(record);
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        debug!(removed = removed.len(), remaining = self.records.len(), "removed records from store");
        removed
    }

    /// Clear all records. Ids keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
