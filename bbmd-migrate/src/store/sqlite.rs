//! SQLite table store
//!
//! Reads and writes one text column of one table. Table and column names come
//! from configuration and are interpolated into SQL, so they must be plain
//! identifiers; values are always bound as parameters.

use super::RecordStore;
use crate::error::StoreError;
use crate::record::ContentRecord;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// Which table and columns hold the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub table: String,
    pub id_column: String,
    pub text_column: String,
}

impl TableSpec {
    pub fn new(
        table: impl Into<String>,
        id_column: impl Into<String>,
        text_column: impl Into<String>,
    ) -> Self {
        TableSpec {
            table: table.into(),
            id_column: id_column.into(),
            text_column: text_column.into(),
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        for name in [&self.table, &self.id_column, &self.text_column] {
            validate_identifier(name)?;
        }
        Ok(())
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec::new("posts", "id", "body")
    }
}

fn validate_identifier(name: &str) -> Result<(), StoreError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}

pub struct SqliteStore {
    conn: Connection,
    select_sql: String,
    update_sql: String,
}

impl SqliteStore {
    /// Open an existing database file. A missing file is an error rather than
    /// a new empty database.
    pub fn open(path: impl AsRef<Path>, spec: TableSpec) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn, spec)
    }

    pub fn from_connection(conn: Connection, spec: TableSpec) -> Result<Self, StoreError> {
        spec.validate()?;
        let TableSpec {
            table,
            id_column,
            text_column,
        } = spec;
        Ok(SqliteStore {
            conn,
            select_sql: format!(
                "SELECT \"{id_column}\", \"{text_column}\" FROM \"{table}\" ORDER BY \"{id_column}\""
            ),
            update_sql: format!(
                "UPDATE \"{table}\" SET \"{text_column}\" = ?1 WHERE \"{id_column}\" = ?2"
            ),
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl RecordStore for SqliteStore {
    fn fetch_all(&mut self) -> Result<Vec<ContentRecord>, StoreError> {
        let mut stmt = self.conn.prepare(&self.select_sql)?;
        let rows = stmt.query_map([], |row| {
            let text: Option<String> = row.get(1)?;
            Ok(ContentRecord::new(row.get(0)?, text.unwrap_or_default()))
        })?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn update(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        let changed = self.conn.execute(&self.update_sql, params![text, id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
