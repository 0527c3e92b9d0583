mod tests;

use crate::record::SlowlogRecord;
use dashmap::DashMap;

/// Records keyed by slow-log id, merging duplicates seen across files.
///
/// Safe to share between threads: `put` and `values` take `&self`.
/// A later `put` for an id replaces the earlier record wholesale.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: DashMap<i64, SlowlogRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Insert or overwrite the record for `record.id`, returning the one it replaced.
    pub fn put(&self, record: SlowlogRecord) -> Option<SlowlogRecord> {
        self.records.insert(record.id, record)
    }

    pub fn get(&self, id: i64) -> Option<SlowlogRecord> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// Snapshot of the stored records in no particular order.
    ///
    /// Concurrent writers may or may not be reflected; every returned record
    /// is complete.
    pub fn values(&self) -> Vec<SlowlogRecord> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Consume the store without cloning.
    pub fn into_values(self) -> Vec<SlowlogRecord> {
        self.records.into_iter().map(|(_, record)| record).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
