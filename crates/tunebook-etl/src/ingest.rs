//! Walks book directories and appends segmented tunes to the store.
//!
//! The expected layout is one numbered directory per book, each holding
//! `.abc` files: `books/3/session-tunes.abc` ingests under book 3. Files
//! in non-numeric directories fall back to the unknown-book sentinel.

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{IngestError, IngestResult};
use crate::reader::read_to_string_lossy;
use tunebook_core::model::UNKNOWN_BOOK;
use tunebook_core::schema::Database;
use tunebook_core::segment::segment;

const ABC_EXTENSION: &str = "abc";

/// Tallies from one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Files read and segmented.
    pub files_processed: usize,
    /// Files skipped because they could not be read.
    pub files_failed: usize,
    /// Tune rows appended to the store.
    pub tunes_stored: usize,
}

fn is_abc_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(ABC_EXTENSION))
        .unwrap_or(false)
}

/// Infer the book id from the file's containing directory name.
/// Non-numeric names (including the root itself) map to [`UNKNOWN_BOOK`].
fn book_id_for_path(path: &Path) -> i64 {
    path.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .and_then(|name| name.parse().ok())
        .unwrap_or(UNKNOWN_BOOK)
}

/// Segment one ABC file and append every tune under the given book id,
/// returning how many rows were stored.
pub fn ingest_file(db: &Database, path: &Path, book_id: i64) -> IngestResult<usize> {
    let text = read_to_string_lossy(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut stored = 0;
    for tune in segment(&text) {
        db.insert_tune(book_id, &tune)?;
        stored += 1;
    }
    Ok(stored)
}

/// Ingest every `.abc` file under `root`.
///
/// Each ingestion run is a full append: nothing is deduplicated against
/// earlier runs. An unreadable file is logged, counted in the report,
/// and skipped; a storage failure aborts the run.
pub fn ingest_directory(db: &Database, root: &Path) -> IngestResult<IngestReport> {
    let mut report = IngestReport::default();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_abc_file(path) {
            continue;
        }

        let book_id = book_id_for_path(path);
        log::info!("Processing {} for book {}", path.display(), book_id);

        match ingest_file(db, path, book_id) {
            Ok(stored) => {
                report.files_processed += 1;
                report.tunes_stored += stored;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                log::warn!("Skipping file: {err}");
                report.files_failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_abc_file() {
        assert!(is_abc_file(Path::new("/books/1/reels.abc")));
        assert!(is_abc_file(Path::new("/books/1/REELS.ABC")));
        assert!(!is_abc_file(Path::new("/books/1/readme.txt")));
        assert!(!is_abc_file(Path::new("/books/1/reels")));
    }

    #[test]
    fn test_book_id_from_directory_name() {
        assert_eq!(book_id_for_path(Path::new("/books/3/tunes.abc")), 3);
        assert_eq!(book_id_for_path(Path::new("/books/017/tunes.abc")), 17);
        assert_eq!(
            book_id_for_path(Path::new("/books/misc/tunes.abc")),
            UNKNOWN_BOOK
        );
    }

    #[test]
    fn test_ingest_file_counts_tunes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pair.abc");
        fs::write(&path, "X:1\nT:A\nX:2\nT:B\n").unwrap();

        let db = Database::open_in_memory().unwrap();
        let stored = ingest_file(&db, &path, 5).unwrap();

        assert_eq!(stored, 2);
        assert_eq!(db.tune_count().unwrap(), 2);
    }

    #[test]
    fn test_ingest_directory_groups_by_book() {
        let temp_dir = TempDir::new().unwrap();
        let book_one = temp_dir.path().join("1");
        let book_two = temp_dir.path().join("2");
        fs::create_dir_all(&book_one).unwrap();
        fs::create_dir_all(&book_two).unwrap();
        fs::write(book_one.join("a.abc"), "X:1\nT:One\n").unwrap();
        fs::write(book_two.join("b.abc"), "X:1\nT:Two\nX:2\nT:Three\n").unwrap();
        fs::write(book_two.join("notes.txt"), "not a book").unwrap();

        let db = Database::open_in_memory().unwrap();
        let report = ingest_directory(&db, temp_dir.path()).unwrap();

        assert_eq!(report.files_processed, 2);
        assert_eq!(report.files_failed, 0);
        assert_eq!(report.tunes_stored, 3);

        let snapshot = db.load_snapshot().unwrap();
        assert_eq!(snapshot.by_book("1").len(), 1);
        assert_eq!(snapshot.by_book("2").len(), 2);
    }

    #[test]
    fn test_ingest_directory_non_numeric_folder_is_book_zero() {
        let temp_dir = TempDir::new().unwrap();
        let misc = temp_dir.path().join("assorted");
        fs::create_dir_all(&misc).unwrap();
        fs::write(misc.join("odd.abc"), "X:9\nT:Stray\n").unwrap();

        let db = Database::open_in_memory().unwrap();
        ingest_directory(&db, temp_dir.path()).unwrap();

        let snapshot = db.load_snapshot().unwrap();
        assert_eq!(snapshot.by_book(&UNKNOWN_BOOK.to_string()).len(), 1);
    }

    #[test]
    fn test_reingestion_appends_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let book = temp_dir.path().join("1");
        fs::create_dir_all(&book).unwrap();
        fs::write(book.join("a.abc"), "X:1\nT:Again\n").unwrap();

        let db = Database::open_in_memory().unwrap();
        ingest_directory(&db, temp_dir.path()).unwrap();
        ingest_directory(&db, temp_dir.path()).unwrap();

        assert_eq!(db.tune_count().unwrap(), 2);
    }

    #[test]
    fn test_empty_directory_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open_in_memory().unwrap();

        let report = ingest_directory(&db, temp_dir.path()).unwrap();
        assert_eq!(report, IngestReport::default());
    }
}
