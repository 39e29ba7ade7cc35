use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tunebook_etl::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tunebook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/tunebook/tunebook.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Ingest ABC book files into the database
    ///
    /// Recursively walks the books directory looking for .abc files. For
    /// each file found:
    ///
    /// - Infers the book id from the containing directory name
    ///   (books/3/session.abc ingests under book 3; non-numeric
    ///   directories fall back to book 0)
    /// - Segments the file into individual tunes at X: index lines
    /// - Extracts title, rhythm type, meter, and key headers
    /// - Appends one row per tune to the 'tunes' table
    ///
    /// Ingestion is append-only: re-running it adds a fresh copy of every
    /// tune rather than replacing earlier rows. Unreadable files are
    /// reported and skipped; the rest of the batch continues.
    Ingest {
        /// Directory of ABC books (default: books_dir from the config)
        path: Option<PathBuf>,
    },
    /// Show collection statistics
    Stats {
        /// Emit statistics as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Search tunes by title (case-insensitive substring)
    Search {
        /// Text to look for within tune titles
        term: String,

        /// Emit matches as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// List tunes by rhythm type (case-insensitive substring)
    Type {
        /// Text to look for within tune types, e.g. "jig" matches
        /// both Jig and Slip Jig
        term: String,

        /// Emit matches as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Show one tune in full by its global id
    Show {
        /// The tune's store-assigned id
        id: String,
    },
    /// List a book's tunes, or show one tune by book and reference
    Book {
        /// Numeric book id
        book: String,

        /// Reference number within the book (the tune's X: value,
        /// matched as text: 6 and 06 are different tunes)
        reference: Option<String>,
    },
    /// Show the config file location, creating a starter file if absent
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => Config::load_with_db_path(db)?,
        None => Config::load()?,
    };

    // Ensure database directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::Ingest { path } => {
            commands::run_ingest(&config, path)?;
        }
        Commands::Stats { json } => {
            commands::show_stats(&config, json)?;
        }
        Commands::Search { term, json } => {
            commands::run_search(&config, &term, json)?;
        }
        Commands::Type { term, json } => {
            commands::run_type_search(&config, &term, json)?;
        }
        Commands::Show { id } => {
            commands::show_tune(&config, &id)?;
        }
        Commands::Book { book, reference } => {
            commands::show_book(&config, &book, reference.as_deref())?;
        }
        Commands::Config => {
            commands::show_config()?;
        }
    }

    Ok(())
}
