//! Ordered in-memory record store backed by a repository.
//!
//! # Responsibility
//! - Own the session's record list in display order.
//! - Assign a session-local `RecordKey` to every record.
//! - Flush the full list through `RecordRepository` on request.
//!
//! # Invariants
//! - `keys` and `records` always have equal length and matching positions.
//! - Removal with an out-of-range index is a no-op.

use super::{RecordRepository, StoreResult};
use crate::model::record::{Record, RecordKey};
use log::debug;

/// Session record list plus its persistence backend.
pub struct RecordStore<R: RecordRepository> {
    repo: R,
    keys: Vec<RecordKey>,
    records: Vec<Record>,
}

impl<R: RecordRepository> RecordStore<R> {
    /// Opens the store by loading every persisted record.
    ///
    /// # Errors
    /// - Returns the repository error when the file is unreadable or malformed.
    pub fn open(repo: R) -> StoreResult<Self> {
        let mut store = Self {
            repo,
            keys: Vec::new(),
            records: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Keys are regenerated; previously issued keys become unknown.
    pub fn reload(&mut self) -> StoreResult<()> {
        let records = self.repo.load()?;
        self.keys = records.iter().map(|_| RecordKey::new()).collect();
        self.records = records;
        Ok(())
    }

    /// Writes the full list through the repository.
    pub fn save(&self) -> StoreResult<()> {
        self.repo.save(&self.records)
    }

    /// Appends a record at the end of the list and returns its key.
    pub fn append(&mut self, record: Record) -> RecordKey {
        let key = RecordKey::new();
        self.keys.push(key);
        self.records.push(record);
        debug!(
            "event=store_append module=store status=ok len={}",
            self.records.len()
        );
        key
    }

    /// Removes the record at `index`, or does nothing when out of range.
    pub fn remove(&mut self, index: usize) -> Option<(RecordKey, Record)> {
        if index >= self.records.len() {
            return None;
        }
        let key = self.keys.remove(index);
        let record = self.records.remove(index);
        debug!(
            "event=store_remove module=store status=ok index={} len={}",
            index,
            self.records.len()
        );
        Some((key, record))
    }

    /// Replaces the contents of the record identified by `key`.
    ///
    /// Returns the record's position, or `None` when the key is unknown.
    pub fn replace(&mut self, key: RecordKey, record: Record) -> Option<usize> {
        let index = self.position(key)?;
        self.records[index] = record;
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn position(&self, key: RecordKey) -> Option<usize> {
        self.keys.iter().position(|candidate| *candidate == key)
    }

    pub fn key_at(&self, index: usize) -> Option<RecordKey> {
        self.keys.get(index).copied()
    }

    pub fn get(&self, key: RecordKey) -> Option<&Record> {
        self.position(key).map(|index| &self.records[index])
    }

    /// Iterates `(key, record)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordKey, &Record)> {
        self.keys.iter().copied().zip(self.records.iter())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
