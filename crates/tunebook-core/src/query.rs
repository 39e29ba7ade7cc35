//! Read-only queries over a materialized set of tune records.
//!
//! A [`Snapshot`] is loaded once per query session from the record store
//! and never mutated; it goes stale if ingestion runs afterwards, which
//! is accepted rather than guarded against. Every operation here takes
//! raw text where the caller would naturally have text (menu input, CLI
//! arguments) and resolves malformed numbers to empty results instead of
//! erroring.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::model::TuneRecord;

/// How many tune types `stats` reports.
const TOP_TYPES_LIMIT: usize = 5;

/// An immutable, in-memory view of every stored tune, in id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    records: Vec<TuneRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn from_records(records: Vec<TuneRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[TuneRecord] {
        &self.records
    }

    /// Look up a record by its global id, given as raw text.
    /// Unparseable text finds nothing.
    #[must_use]
    pub fn by_id(&self, id_text: &str) -> Option<&TuneRecord> {
        let id = id_text.trim().parse::<i64>().ok()?;
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in a book, given the book id as raw text.
    #[must_use]
    pub fn by_book(&self, book_text: &str) -> Vec<&TuneRecord> {
        let Ok(book_id) = book_text.trim().parse::<i64>() else {
            return Vec::new();
        };
        self.records.iter().filter(|r| r.book_id == book_id).collect()
    }

    /// Records matching a book id and a reference number.
    ///
    /// The reference is compared as text, never numerically: `"6"` and
    /// `"06"` are distinct tunes. Results keep insertion order, so the
    /// first element is the first-inserted match when re-ingestion has
    /// produced duplicates.
    #[must_use]
    pub fn by_book_and_reference(&self, book_text: &str, ref_text: &str) -> Vec<&TuneRecord> {
        let Ok(book_id) = book_text.trim().parse::<i64>() else {
            return Vec::new();
        };
        let reference = ref_text.trim();
        self.records
            .iter()
            .filter(|r| r.book_id == book_id && r.reference_number == reference)
            .collect()
    }

    /// Case-insensitive substring search over titles. Records whose title
    /// is empty never match.
    #[must_use]
    pub fn search_by_title(&self, term: &str) -> Vec<&TuneRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| !r.title.is_empty() && r.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose tune type contains the term, case-insensitively:
    /// `"jig"` matches both `"Jig"` and `"Slip Jig"`. Records whose type
    /// is empty never match.
    #[must_use]
    pub fn by_type(&self, term: &str) -> Vec<&TuneRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| !r.tune_type.is_empty() && r.tune_type.to_lowercase().contains(&needle))
            .collect()
    }

    /// Aggregate statistics: total count, per-book counts in ascending
    /// book order, and the most frequent tune types. Frequency ties keep
    /// encounter order (the sort is stable).
    #[must_use]
    pub fn stats(&self) -> Stats {
        let mut per_book: BTreeMap<i64, usize> = BTreeMap::new();
        let mut type_counts: HashMap<String, usize> = HashMap::new();
        let mut type_order: Vec<String> = Vec::new();

        for record in &self.records {
            *per_book.entry(record.book_id).or_default() += 1;
            if !type_counts.contains_key(&record.tune_type) {
                type_order.push(record.tune_type.clone());
            }
            *type_counts.entry(record.tune_type.clone()).or_default() += 1;
        }

        let mut top_types: Vec<TypeCount> = type_order
            .into_iter()
            .map(|name| {
                let count = type_counts.get(&name).copied().unwrap_or(0);
                TypeCount { name, count }
            })
            .collect();
        top_types.sort_by(|a, b| b.count.cmp(&a.count));
        top_types.truncate(TOP_TYPES_LIMIT);

        Stats {
            total: self.records.len(),
            per_book: per_book
                .into_iter()
                .map(|(book_id, count)| BookCount { book_id, count })
                .collect(),
            top_types,
        }
    }
}

/// Aggregate statistics for a snapshot.
///
/// An empty snapshot produces `total == 0` with empty count lists; that
/// is the defined no-data result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub per_book: Vec<BookCount>,
    pub top_types: Vec<TypeCount>,
}

/// Number of tunes in one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCount {
    pub book_id: i64,
    pub count: usize,
}

/// Frequency of one tune type across the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub name: String,
    pub count: usize,
}
