use anyhow::Result;
use tunebook_core::schema::Database;
use tunebook_etl::Config;

use super::print_tune_full;

pub fn show_tune(config: &Config, id: &str) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let snapshot = db.load_snapshot()?;

    // Malformed ids resolve to "no such tune", not an error.
    match snapshot.by_id(id) {
        Some(record) => print_tune_full(record),
        None => println!("No tune with id {id}"),
    }

    Ok(())
}
