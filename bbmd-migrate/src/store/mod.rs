//! Record stores the migration reads from and writes back to
//!
//! The driver only needs two operations, so every backend is a small
//! [`RecordStore`] implementation:
//!
//! - [`MemoryStore`]: records held in a map, used by tests and dry runs
//! - [`JsonStore`]: a JSON array of `{ "id", "text" }` objects on disk
//! - [`SqliteStore`]: a table with an integer id column and a text column

mod json;
mod sqlite;

pub use json::JsonStore;
pub use sqlite::{SqliteStore, TableSpec};

use crate::error::StoreError;
use crate::record::ContentRecord;
use std::collections::BTreeMap;

/// Storage seen by the migration driver.
pub trait RecordStore {
    /// Every record, in a stable order.
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError>;

    /// Replace the text of record `id`.
    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &mut S {
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError> {
        (**self).fetch_all()
    }

    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        (**self).update(id, text)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError> {
        (**self).fetch_all()
    }

    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        (**self).update(id, text)
    }
}

/// In-memory store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<i64, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = ContentRecord>) -> Self {
        MemoryStore {
            records: records
                .into_iter()
                .map(|record| (record.id, record.text))
                .collect(),
            writes: 0,
        }
    }

    pub fn insert(&mut self, id: i64, text: impl Into<String>) {
        self.records.insert(id, text.into());
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.records.get(&id).map(String::as_str)
    }

    /// Number of successful `update` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RecordStore for MemoryStore {
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .map(|(id, text)| ContentRecord::new(*id, text.clone()))
            .collect())
    }

    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        let slot = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = text.to_string();
        self.writes += 1;
        Ok(())
    }
}
