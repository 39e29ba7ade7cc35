use anyhow::Result;
use tunebook_core::schema::Database;
use tunebook_etl::Config;

use super::print_tune_line;

pub fn run_type_search(config: &Config, term: &str, json: bool) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let snapshot = db.load_snapshot()?;
    let matches = snapshot.by_type(term);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No tunes of type \"{term}\"");
        return Ok(());
    }

    println!("\n{} tune(s) of type \"{term}\":\n", matches.len());
    for record in matches {
        print_tune_line(record);
    }

    Ok(())
}
