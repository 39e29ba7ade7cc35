pub mod tune;

pub use tune::{SegmentedTune, TuneRecord, UNKNOWN_BOOK, UNKNOWN_TITLE, UNKNOWN_TYPE};
