//! ABC tune segmentation.
//!
//! Splits the text of one ABC source file into discrete tunes. This is a
//! single-pass line scanner, not a notation parser: it only recognizes the
//! header-line prefixes it needs (`X:`, `T:`, `R:`, `M:`, `K:`) and treats
//! everything else as opaque tune content.

use crate::model::SegmentedTune;

/// The `X:` index field opens a new tune.
const INDEX_PREFIX: &str = "X:";
const TITLE_PREFIX: &str = "T:";
const TYPE_PREFIX: &str = "R:";
const METER_PREFIX: &str = "M:";
const KEY_PREFIX: &str = "K:";

/// Segment already-decoded ABC text into tunes.
///
/// The returned iterator is lazy and finite; calling `segment` again on
/// the same input restarts from the beginning. Input with no `X:` lines
/// yields nothing, and lines before the first `X:` line are discarded.
/// Segmentation itself never fails: undecodable bytes are the file
/// reader's problem, and anything that is valid text is acceptable here.
pub fn segment(input: &str) -> Segments<'_> {
    Segments {
        lines: input.lines(),
        current: None,
    }
}

/// Iterator over the tunes of one source text. Created by [`segment`].
#[derive(Debug)]
pub struct Segments<'a> {
    lines: std::str::Lines<'a>,
    /// The tune being accumulated, once an `X:` line has been seen.
    current: Option<SegmentedTune>,
}

impl Iterator for Segments<'_> {
    type Item = SegmentedTune;

    fn next(&mut self) -> Option<SegmentedTune> {
        for raw in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() {
                // Blank lines never start, end, or populate a tune.
                continue;
            }

            if let Some(reference) = line.strip_prefix(INDEX_PREFIX) {
                let finished = self.current.take();
                let mut tune = SegmentedTune::new(reference.trim());
                append_line(&mut tune, line);
                self.current = Some(tune);
                if finished.is_some() {
                    return finished;
                }
            } else if let Some(tune) = self.current.as_mut() {
                append_line(tune, line);
            }
            // Not inside a tune yet: discard the line.
        }

        self.current.take()
    }
}

/// Add one stripped, non-blank line to the tune: record it in `content`
/// and extract any header field it carries. The title is first-wins;
/// type, meter, and key are last-wins. Callers depend on exactly that
/// asymmetry; do not harmonize it.
fn append_line(tune: &mut SegmentedTune, line: &str) {
    tune.content.push_str(line);
    tune.content.push('\n');

    if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
        if tune.title.is_none() {
            tune.title = Some(rest.trim().to_string());
        }
    } else if let Some(rest) = line.strip_prefix(TYPE_PREFIX) {
        tune.tune_type = Some(rest.trim().to_string());
    } else if let Some(rest) = line.strip_prefix(METER_PREFIX) {
        tune.meter = Some(rest.trim().to_string());
    } else if let Some(rest) = line.strip_prefix(KEY_PREFIX) {
        tune.key_sig = Some(rest.trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_index_lines_yields_nothing() {
        assert_eq!(segment("").count(), 0);
        assert_eq!(segment("T:Orphan Title\nabc|def|\n").count(), 0);
        assert_eq!(segment("\n\n   \n").count(), 0);
    }

    #[test]
    fn test_single_tune() {
        let input = "X:1\nT:The Butterfly\nR:Slip Jig\nK:Gmaj\nabc|\n";
        let tunes: Vec<_> = segment(input).collect();

        assert_eq!(tunes.len(), 1);
        let tune = &tunes[0];
        assert_eq!(tune.reference_number, "1");
        assert_eq!(tune.title.as_deref(), Some("The Butterfly"));
        assert_eq!(tune.tune_type.as_deref(), Some("Slip Jig"));
        assert_eq!(tune.key_sig.as_deref(), Some("Gmaj"));
        assert!(tune.meter.is_none());
        assert_eq!(tune.content, "X:1\nT:The Butterfly\nR:Slip Jig\nK:Gmaj\nabc|\n");
    }

    #[test]
    fn test_two_tunes_in_order() {
        let tunes: Vec<_> = segment("X:1\nT:A\nX:2\nT:B\n").collect();

        assert_eq!(tunes.len(), 2);
        assert_eq!(tunes[0].reference_number, "1");
        assert_eq!(tunes[0].title.as_deref(), Some("A"));
        assert_eq!(tunes[1].reference_number, "2");
        assert_eq!(tunes[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn test_one_record_per_index_line() {
        let input = "X:1\nX:2\nX:3\n";
        let tunes: Vec<_> = segment(input).collect();

        // Consecutive X: lines each start a fresh, header-only tune.
        assert_eq!(tunes.len(), 3);
        assert_eq!(tunes[1].content, "X:2\n");
        assert!(tunes[1].title.is_none());
    }

    #[test]
    fn test_lines_before_first_index_are_discarded() {
        let input = "% book preamble\nT:Not A Tune\n\nX:1\nT:Real Tune\n";
        let tunes: Vec<_> = segment(input).collect();

        assert_eq!(tunes.len(), 1);
        assert_eq!(tunes[0].title.as_deref(), Some("Real Tune"));
        assert!(!tunes[0].content.contains("preamble"));
    }

    #[test]
    fn test_blank_lines_never_stored() {
        let input = "X:1\nT:Gapped\n\n\nM:6/8\n\nabc|\n";
        let tunes: Vec<_> = segment(input).collect();

        assert_eq!(tunes.len(), 1);
        assert_eq!(tunes[0].content, "X:1\nT:Gapped\nM:6/8\nabc|\n");
    }

    #[test]
    fn test_lines_are_stripped() {
        let input = "  X:1  \n\tT:Indented Tune\t\n  abc|  \n";
        let tunes: Vec<_> = segment(input).collect();

        assert_eq!(tunes[0].reference_number, "1");
        assert_eq!(tunes[0].title.as_deref(), Some("Indented Tune"));
        assert_eq!(tunes[0].content, "X:1\nT:Indented Tune\nabc|\n");
    }

    #[test]
    fn test_title_first_wins_others_last_win() {
        let input = "X:1\nT:First Title\nT:Second Title\nR:Reel\nR:Jig\nM:4/4\nM:6/8\nK:D\nK:G\n";
        let tunes: Vec<_> = segment(input).collect();

        let tune = &tunes[0];
        assert_eq!(tune.title.as_deref(), Some("First Title"));
        assert_eq!(tune.tune_type.as_deref(), Some("Jig"));
        assert_eq!(tune.meter.as_deref(), Some("6/8"));
        assert_eq!(tune.key_sig.as_deref(), Some("G"));
    }

    #[test]
    fn test_reference_number_round_trips_as_text() {
        let tunes: Vec<_> = segment("X:007\nT:Padded\nX: 12a \nT:Suffixed\n").collect();

        assert_eq!(tunes[0].reference_number, "007");
        assert_eq!(tunes[1].reference_number, "12a");
    }

    #[test]
    fn test_record_count_equals_index_line_count() {
        let input = "junk\nX:1\nabc\nX:2\nT:Two\ndef\n\nX:3\n";
        assert_eq!(segment(input).count(), 3);
    }

    #[test]
    fn test_restartable() {
        let input = "X:1\nT:A\nX:2\nT:B\n";
        let first: Vec<_> = segment(input).collect();
        let second: Vec<_> = segment(input).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lazy_first_item_available_before_exhaustion() {
        let input = "X:1\nT:A\nX:2\nT:B\nX:3\nT:C\n";
        let mut tunes = segment(input);
        let first = tunes.next();
        assert_eq!(
            first.and_then(|t| t.title),
            Some("A".to_string())
        );
    }
}
