use anyhow::Result;
use tunebook_core::schema::Database;
use tunebook_etl::Config;

use super::print_tune_line;

pub fn run_search(config: &Config, term: &str, json: bool) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let snapshot = db.load_snapshot()?;
    let matches = snapshot.search_by_title(term);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No tunes matching \"{term}\"");
        return Ok(());
    }

    println!("\n{} tune(s) matching \"{term}\":\n", matches.len());
    for record in matches {
        print_tune_line(record);
    }

    Ok(())
}
