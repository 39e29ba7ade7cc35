pub mod book;
pub mod config;
pub mod ingest;
pub mod search;
pub mod show;
pub mod stats;
pub mod types;

pub use book::show_book;
pub use config::show_config;
pub use ingest::run_ingest;
pub use search::run_search;
pub use show::show_tune;
pub use stats::show_stats;
pub use types::run_type_search;

use tunebook_core::model::TuneRecord;

/// One-line listing used by search and book listings.
pub(crate) fn print_tune_line(record: &TuneRecord) {
    println!(
        "  #{:<5} book {:>3}  X:{:<6} {:<40} {}",
        record.id, record.book_id, record.reference_number, record.title, record.tune_type
    );
}

/// Full-record display used by show and book+reference lookups.
pub(crate) fn print_tune_full(record: &TuneRecord) {
    println!("\n♪ #{} — {}", record.id, record.title);
    println!("  Book:      {}", record.book_id);
    println!("  Reference: {}", record.reference_number);
    println!("  Type:      {}", record.tune_type);
    if !record.meter.is_empty() {
        println!("  Meter:     {}", record.meter);
    }
    if !record.key_sig.is_empty() {
        println!("  Key:       {}", record.key_sig);
    }
    println!();
    for line in record.content.lines() {
        println!("  {line}");
    }
}
