use anyhow::{bail, Result};
use std::path::PathBuf;
use tunebook_core::schema::Database;
use tunebook_etl::{ingest_directory, Config};

pub fn run_ingest(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let Some(books_dir) = path.or_else(|| config.books_dir.clone()) else {
        bail!("no books directory given; pass a PATH or set books_dir in the config");
    };
    if !books_dir.exists() {
        bail!("books directory {} not found", books_dir.display());
    }

    tracing::info!("Starting ingestion of {}", books_dir.display());

    let db = Database::open(&config.database_path)?;
    let report = ingest_directory(&db, &books_dir)?;

    println!("\n✓ Ingestion complete");
    println!("  Files processed: {}", report.files_processed);
    if report.files_failed > 0 {
        println!("  Files skipped:   {}", report.files_failed);
    }
    println!("  Tunes stored:    {}", report.tunes_stored);
    Ok(())
}
