/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Tune records, one row per X: index line seen during ingestion.
-- Append-only: re-ingesting a book adds new rows rather than replacing
-- old ones, and ids are never reused.
CREATE TABLE IF NOT EXISTS tunes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id INTEGER NOT NULL,
    reference_number TEXT NOT NULL,
    title TEXT NOT NULL,
    tune_type TEXT NOT NULL,
    meter TEXT NOT NULL DEFAULT '',
    key_sig TEXT NOT NULL DEFAULT '',
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Lookup indexes (performance only; correctness does not depend on them)
CREATE INDEX IF NOT EXISTS idx_tunes_book_id ON tunes(book_id);
CREATE INDEX IF NOT EXISTS idx_tunes_book_ref ON tunes(book_id, reference_number);
";

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: MIGRATION_001,
}];
