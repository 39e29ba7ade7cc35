//! Core domain model for tunebook.
//!
//! This crate defines the tune record model, the ABC tune segmenter,
//! the SQLite schema, and the snapshot query layer.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod segment;

pub use error::{Error, Result};
