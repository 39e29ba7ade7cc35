use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for tunebook.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TUNEBOOK_* prefix)
/// 3. Config file (~/.config/tunebook/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: TUNEBOOK_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/tunebook/tunebook.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    /// Default directory of ABC books to ingest, used when the ingest
    /// command is given no path.
    ///
    /// Can be set via:
    /// - ENV: TUNEBOOK_BOOKS_DIR
    /// - Config: books_dir = "/path/to/books"
    pub books_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            books_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/tunebook/config.toml
    /// Reads environment variables with TUNEBOOK_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        // If config file exists, load it
        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("tunebook");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with custom database path.
    ///
    /// This is used when the --db CLI flag is provided.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }
}

/// Get the default database path.
///
/// Returns: ~/.local/share/tunebook/tunebook.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunebook")
        .join("tunebook.db")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/tunebook/config.toml
/// - macOS: ~/Library/Application Support/tunebook/config.toml
/// - Windows: %APPDATA%\tunebook\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunebook")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Tunebook Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TUNEBOOK_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the SQLite database holding ingested tune records
#
# Can also be set via:
# - CLI: tunebook --db /custom/path.db stats
# - Environment: TUNEBOOK_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/tunebook.db"

# Default directory of ABC books for `tunebook ingest`
#
# Expected layout: one numbered directory per book, each holding .abc
# files, e.g. books/3/session-tunes.abc ingests under book 3.
#
# Can also be set via:
# - Environment: TUNEBOOK_BOOKS_DIR=/path/to/books
#books_dir = "/path/to/books"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
