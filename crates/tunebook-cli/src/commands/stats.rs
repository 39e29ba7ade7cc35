use anyhow::Result;
use tunebook_core::schema::Database;
use tunebook_etl::Config;

pub fn show_stats(config: &Config, json: bool) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let snapshot = db.load_snapshot()?;
    let stats = snapshot.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n📊 Collection Stats\n");
    println!("  Database:    {}", config.database_path.display());
    println!("  Total tunes: {}", stats.total);

    if stats.total == 0 {
        println!("\n  Run `tunebook ingest` to load some books");
        return Ok(());
    }

    println!("\n  Tunes per book:");
    for book in &stats.per_book {
        println!("    Book {:>4}: {}", book.book_id, book.count);
    }

    println!("\n  Most common tune types:");
    for tune_type in &stats.top_types {
        println!("    {:<16} {}", tune_type.name, tune_type.count);
    }

    Ok(())
}
