//! Error types for stores and the migration driver

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON record file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid SQL identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Record {0} not found")]
    NotFound(i64),
}

/// Fatal errors that stop a migration run.
///
/// Per-record write failures are not fatal; they are counted in the report.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Failed to read records: {0}")]
    Fetch(#[source] StoreError),
}
