//! Ingestion driver for tunebook.
//!
//! Discovers ABC book files on disk, infers book ids from directory
//! names, reads file contents with lossy decoding, and feeds segmented
//! tunes into the record store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod ingest;
pub mod reader;

pub use config::Config;
pub use error::{IngestError, IngestResult};
pub use ingest::{ingest_directory, ingest_file, IngestReport};
