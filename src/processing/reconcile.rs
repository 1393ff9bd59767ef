/*! Reconciliation of aligned lines with original lines

The aligner outputs a whitespace-normalized subset of the original lines, without telling
which ones. Each aligned line is looked up in the original document, scanning forward
from the last match only: the aligner never reorders lines, so matches are non-decreasing.

If several original lines normalize to the same string, the first one after the last match wins.
!*/
use itertools::Itertools;

use crate::processing::index::{IndexSequence, UNMATCHED};

/// Collapse whitespace runs into a single space and trim both ends.
///
/// A lone whitespace character other than a space (a tab, a no-break space) is replaced
/// as well, not only runs of two or more: `"a\tb"` and `"a b"` normalize alike.
pub fn normalize(segment: &str) -> String {
    segment.split_whitespace().join(" ")
}

/// Map each `aligned` line to the 1-based position of its original line in `original`,
/// or to [UNMATCHED].
///
/// An unmatched line does not move the cursor: the next aligned line is looked up
/// from the same position.
pub fn reconcile<O, A>(original: &[O], aligned: &[A]) -> IndexSequence
where
    O: AsRef<str>,
    A: AsRef<str>,
{
    let original: Vec<String> = original.iter().map(|s| normalize(s.as_ref())).collect();
    let mut cursor = 0;

    aligned
        .iter()
        .map(|line| {
            let line = normalize(line.as_ref());
            match original[cursor..].iter().position(|o| *o == line) {
                Some(offset) => {
                    cursor += offset + 1;
                    cursor as i64
                }
                None => UNMATCHED,
            }
        })
        .collect::<Vec<i64>>()
        .into()
}
