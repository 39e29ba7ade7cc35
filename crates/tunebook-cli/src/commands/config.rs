use anyhow::Result;
use tunebook_etl::config::{config_file_path, ensure_config_file};

pub fn show_config() -> Result<()> {
    let created = ensure_config_file()?;
    let path = config_file_path();

    if created {
        println!("Created starter config at {}", path.display());
    } else {
        println!("Config file: {}", path.display());
    }

    Ok(())
}
