//! The batch migration loop

use crate::error::{MigrateError, StoreError};
use crate::record::ContentRecord;
use crate::store::RecordStore;
use bbmd_babel::{convert, has_markup};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordOutcome {
    /// Output differed from input and was (or, in a dry run, would be) written.
    Converted,
    /// Text was empty or whitespace only.
    SkippedEmpty,
    /// The pre-scan found no BBCode tag.
    SkippedNoMarkup,
    /// The pipeline ran but produced the same text.
    Unchanged,
    /// Writing the converted text back failed.
    Failed,
}

/// Decide what the migration does with one record, without touching a store.
///
/// Returns the new text only for [`RecordOutcome::Converted`].
pub fn migrate_record(record: &ContentRecord) -> (RecordOutcome, Option<String>) {
    if record.text.trim().is_empty() {
        return (RecordOutcome::SkippedEmpty, None);
    }
    if !has_markup(&record.text) {
        return (RecordOutcome::SkippedNoMarkup, None);
    }
    let converted = convert(&record.text);
    if converted == record.text {
        (RecordOutcome::Unchanged, None)
    } else {
        (RecordOutcome::Converted, Some(converted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    pub id: i64,
    pub message: String,
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub processed: usize,
    pub converted: usize,
    pub skipped_empty: usize,
    pub skipped_no_markup: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl MigrationReport {
    fn count(&mut self, outcome: RecordOutcome) {
        self.processed += 1;
        match outcome {
            RecordOutcome::Converted => self.converted += 1,
            RecordOutcome::SkippedEmpty => self.skipped_empty += 1,
            RecordOutcome::SkippedNoMarkup => self.skipped_no_markup += 1,
            RecordOutcome::Unchanged => self.unchanged += 1,
            RecordOutcome::Failed => self.failed += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            writeln!(f, "Dry run, nothing was written.")?;
        }
        writeln!(f, "processed:         {}", self.processed)?;
        writeln!(f, "converted:         {}", self.converted)?;
        writeln!(f, "skipped (empty):   {}", self.skipped_empty)?;
        writeln!(f, "skipped (no tags): {}", self.skipped_no_markup)?;
        writeln!(f, "unchanged:         {}", self.unchanged)?;
        write!(f, "failed:            {}", self.failed)?;
        for failure in &self.failures {
            write!(f, "\n  record {}: {}", failure.id, failure.message)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Classify and count, but never call `update`.
    pub dry_run: bool,
}

/// Runs the conversion over every record of a store.
pub struct Migrator<S> {
    store: S,
    options: MigrateOptions,
}

impl<S: RecordStore> Migrator<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, MigrateOptions::default())
    }

    pub fn with_options(store: S, options: MigrateOptions) -> Self {
        Migrator { store, options }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Migrate every record.
    ///
    /// Only a failure to read the records aborts the run. A failed write is
    /// logged, counted and listed in the report, and the loop moves on.
    pub fn run(&mut self) -> Result<MigrationReport, MigrateError> {
        let records = self.store.fetch_all().map_err(MigrateError::Fetch)?;
        info!(
            records = records.len(),
            dry_run = self.options.dry_run,
            "starting migration"
        );

        let mut report = MigrationReport {
            dry_run: self.options.dry_run,
            ..MigrationReport::default()
        };

        for record in &records {
            let (outcome, converted) = migrate_record(record);
            let outcome = match converted {
                Some(text) if !self.options.dry_run => match self.store.update(record.id, &text) {
                    Ok(()) => outcome,
                    Err(err) => {
                        self.record_failure(&mut report, record.id, &err);
                        RecordOutcome::Failed
                    }
                },
                _ => outcome,
            };
            debug!(id = record.id, ?outcome, "record processed");
            report.count(outcome);
        }

        info!(
            processed = report.processed,
            converted = report.converted,
            skipped_empty = report.skipped_empty,
            skipped_no_markup = report.skipped_no_markup,
            unchanged = report.unchanged,
            failed = report.failed,
            "migration finished"
        );
        Ok(report)
    }

    fn record_failure(&self, report: &mut MigrationReport, id: i64, err: &StoreError) {
        warn!(id, error = %err, "failed to write converted record");
        report.failures.push(RecordFailure {
            id,
            message: err.to_string(),
        });
    }
}
