use anyhow::Result;
use tunebook_core::schema::Database;
use tunebook_etl::Config;

use super::{print_tune_full, print_tune_line};

pub fn show_book(config: &Config, book: &str, reference: Option<&str>) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let snapshot = db.load_snapshot()?;

    if let Some(reference) = reference {
        // Duplicates from repeated ingestion are possible; the first
        // match by insertion order wins.
        let matches = snapshot.by_book_and_reference(book, reference);
        match matches.first() {
            Some(record) => print_tune_full(record),
            None => println!("No tune X:{reference} in book {book}"),
        }
        return Ok(());
    }

    let records = snapshot.by_book(book);
    if records.is_empty() {
        println!("No tunes in book {book}");
        return Ok(());
    }

    println!("\n{} tune(s) in book {book}:\n", records.len());
    for record in records {
        print_tune_line(record);
    }

    Ok(())
}
