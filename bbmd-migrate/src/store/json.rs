//! JSON file store
//!
//! The file holds a single array:
//!
//! ```json
//! [
//!   { "id": 1, "text": "[b]hello[/b]" },
//!   { "id": 2, "text": "plain" }
//! ]
//! ```
//!
//! Every update rewrites the whole file through a temporary file in the same
//! directory, so a crash mid-write leaves either the old or the new content.

use super::RecordStore;
use crate::error::StoreError;
use crate::record::ContentRecord;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    records: Option<Vec<ContentRecord>>,
}

impl JsonStore {
    /// Open a store over `path`. The file is read lazily on first access.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        JsonStore {
            path: path.into(),
            records: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&mut self) -> Result<&mut Vec<ContentRecord>, StoreError> {
        if self.records.is_none() {
            let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
            let records: Vec<ContentRecord> = serde_json::from_str(&raw)?;
            self.records = Some(records);
        }
        Ok(self.records.get_or_insert_with(Vec::new))
    }

    fn persist(&self, records: &[ContentRecord]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(self.load()?.clone())
    }

    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        // The cache only takes the new text once it is on disk
        let mut snapshot = self.load()?.clone();
        let record = snapshot
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.text = text.to_string();

        self.persist(&snapshot)?;
        self.records = Some(snapshot);
        Ok(())
    }
}
