use rusqlite::Connection;
use std::path::Path;

use crate::error::Result;
use crate::model::{SegmentedTune, UNKNOWN_TITLE, UNKNOWN_TYPE};
use crate::query::Snapshot;

use super::migrations::MIGRATIONS;

/// The tune record store: a database connection plus the schema it owns.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Idempotent: re-running against an existing database applies only
    /// the migrations it has not seen and never touches existing rows.
    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Tune record CRUD (create and read; rows are never updated or deleted)
impl Database {
    /// Append one segmented tune under the given book id, returning the
    /// fresh store-assigned id.
    ///
    /// Absent optional headers are replaced with their defaults here, so
    /// stored rows never carry NULLs. Duplicate (book, reference) pairs
    /// are accepted: repeated ingestion runs append rather than upsert.
    pub fn insert_tune(&self, book_id: i64, tune: &SegmentedTune) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO tunes (
                book_id, reference_number, title, tune_type,
                meter, key_sig, content, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                book_id,
                tune.reference_number,
                tune.title.as_deref().unwrap_or(UNKNOWN_TITLE),
                tune.tune_type.as_deref().unwrap_or(UNKNOWN_TYPE),
                tune.meter.as_deref().unwrap_or(""),
                tune.key_sig.as_deref().unwrap_or(""),
                tune.content,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Materialize every stored tune, in id (= insertion) order, as a
    /// read-only snapshot for the query layer. The snapshot does not see
    /// rows inserted after it was loaded.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let mut stmt = self.conn.prepare(
            "SELECT id, book_id, reference_number, title, tune_type,
                    meter, key_sig, content, created_at
             FROM tunes
             ORDER BY id",
        )?;

        let records = stmt
            .query_map([], |row| Self::row_to_record(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Snapshot::from_records(records))
    }

    /// Total number of stored tunes.
    pub fn tune_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM tunes", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<crate::model::TuneRecord> {
        let created_at_str: String = row.get(8)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    8,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?
            .into();

        Ok(crate::model::TuneRecord {
            id: row.get(0)?,
            book_id: row.get(1)?,
            reference_number: row.get(2)?,
            title: row.get(3)?,
            tune_type: row.get(4)?,
            meter: row.get(5)?,
            key_sig: row.get(6)?,
            content: row.get(7)?,
            created_at,
        })
    }
}
