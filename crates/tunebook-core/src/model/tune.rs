use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder stored when a tune has no `T:` header.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Placeholder stored when a tune has no `R:` header.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Book sentinel used when no numeric book id can be inferred for a file.
pub const UNKNOWN_BOOK: i64 = 0;

/// A tune as produced by the segmenter, before it has been stored.
///
/// Carries no id or book: identity is assigned by the record store at
/// insertion time, and the book id is supplied by the ingestion driver.
/// Optional headers stay `None` here; defaults are substituted at insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedTune {
    /// Value of the `X:` index field, verbatim (trimmed). Kept as text:
    /// reference numbers like `"007"` must round-trip without numeric
    /// coercion.
    pub reference_number: String,

    /// First `T:` header in the tune, if any.
    pub title: Option<String>,

    /// Last `R:` (rhythm/type) header in the tune, if any.
    pub tune_type: Option<String>,

    /// Last `M:` header in the tune, if any.
    pub meter: Option<String>,

    /// Last `K:` header in the tune, if any.
    pub key_sig: Option<String>,

    /// Every line of the tune (its `X:` line included), stripped and
    /// newline-joined, in source order. Blank lines are never stored.
    pub content: String,
}

impl SegmentedTune {
    #[must_use]
    pub fn new(reference_number: impl Into<String>) -> Self {
        Self {
            reference_number: reference_number.into(),
            ..Self::default()
        }
    }
}

/// A tune row as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuneRecord {
    /// Store-assigned identity. Strictly increasing in insertion order,
    /// never reused.
    pub id: i64,

    /// Grouping identifier supplied by the ingestion driver;
    /// [`UNKNOWN_BOOK`] when none could be inferred.
    pub book_id: i64,

    /// The tune's `X:` index value, compared as text everywhere.
    pub reference_number: String,

    pub title: String,
    pub tune_type: String,
    pub meter: String,
    pub key_sig: String,

    /// Full tune body for display, as described on
    /// [`SegmentedTune::content`].
    pub content: String,

    pub created_at: DateTime<Utc>,
}
