//! Batch migration of stored BBCode bodies to Markdown
//!
//! Reads every record from a [`RecordStore`], runs it through
//! [`bbmd_babel::convert`], and writes back the ones that changed. The store
//! is handed to the [`Migrator`] explicitly; nothing here reaches for a
//! global connection.
//!
//! ```ignore
//! let store = SqliteStore::open("blog.db", TableSpec::default())?;
//! let report = Migrator::new(store).run()?;
//! println!("{report}");
//! ```
//!
//! Each record lands in exactly one bucket of the [`MigrationReport`]:
//! converted, skipped (empty), skipped (no tags), unchanged, or failed.

pub mod driver;
pub mod error;
pub mod record;
pub mod store;

pub use driver::{
    migrate_record, MigrateOptions, MigrationReport, Migrator, RecordFailure, RecordOutcome,
};
pub use error::{MigrateError, StoreError};
pub use record::ContentRecord;
pub use store::{JsonStore, MemoryStore, RecordStore, SqliteStore, TableSpec};
