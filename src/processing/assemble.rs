/*! Assembly of sentence pairs

The `i`-th source index is paired with the `i`-th target index, and both are resolved
against their original document.

Pairs are dropped when:
- either index is not positive (unmatched line),
- either index is past the end of its document. This usually means that index files
  and original files come from different versions; a diagnostic is logged.

When both sequences have different lengths, extra entries of the longest one are dropped
and a diagnostic is logged: the aligner should output as many lines per language.

Diagnostics are logged at the `error` level, so that they show without `RUST_LOG` set.
!*/
use log::error;
use serde::Serialize;

use crate::processing::{IndexSequence, SegmentPair};

/// Counters of an assembly run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AssembleStats {
    pub documents: u64,
    pub pairs: u64,
    pub unmatched: u64,
    pub out_of_range: u64,
    pub length_mismatches: u64,
    pub truncated: u64,
}

#[derive(Debug, Default)]
pub struct Assembler {
    stats: AssembleStats,
}

/// Get the 1-based `idx`-th segment.
#[inline]
fn resolve(segments: &[String], idx: i64) -> Option<&String> {
    usize::try_from(idx)
        .ok()
        .and_then(|idx| idx.checked_sub(1))
        .and_then(|idx| segments.get(idx))
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &AssembleStats {
        &self.stats
    }

    pub fn into_stats(self) -> AssembleStats {
        self.stats
    }

    /// Build the valid pairs of a document, in index sequence order.
    ///
    /// `title` is only used in diagnostics.
    pub fn assemble(
        &mut self,
        title: &str,
        source: &[String],
        target: &[String],
        source_indices: &IndexSequence,
        target_indices: &IndexSequence,
    ) -> Vec<SegmentPair> {
        self.stats.documents += 1;

        if source_indices.len() != target_indices.len() {
            let (src_len, trg_len) = (source_indices.len(), target_indices.len());
            error!(
                "Pair: {}, index length mismatch: {} source, {} target. Dropping {} entries.",
                title,
                src_len,
                trg_len,
                src_len.abs_diff(trg_len)
            );
            self.stats.length_mismatches += 1;
            self.stats.truncated += src_len.abs_diff(trg_len) as u64;
        }

        let mut pairs = Vec::with_capacity(source_indices.len().min(target_indices.len()));
        for (&src_idx, &trg_idx) in source_indices.iter().zip(target_indices.iter()) {
            if src_idx <= 0 || trg_idx <= 0 {
                self.stats.unmatched += 1;
                continue;
            }

            match (resolve(source, src_idx), resolve(target, trg_idx)) {
                (Some(src), Some(trg)) => {
                    pairs.push(SegmentPair::new(src.clone(), trg.clone()));
                }
                _ => {
                    error!(
                        "Pair: {}, source index: {}, target index: {}",
                        title, src_idx, trg_idx
                    );
                    self.stats.out_of_range += 1;
                }
            }
        }

        self.stats.pairs += pairs.len() as u64;
        pairs
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;

    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    /// Install the capturing logger (once per test binary).
    fn capture_logs() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Debug);
    }

    /// Captured messages mentioning `title`.
    fn logged(title: &str) -> Vec<(Level, String)> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, msg)| msg.contains(title))
            .cloned()
            .collect()
    }

    fn segments(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn seq(indices: &[i64]) -> IndexSequence {
        IndexSequence::from(indices.to_vec())
    }

    #[test]
    fn single_pair() {
        let src = segments(&["Hello world.\n", "Foo bar.\n", "Baz.\n"]);
        let trg = segments(&["Bonjour monde.\n", "Quux.\n"]);
        let mut asm = Assembler::new();
        let pairs = asm.assemble(
            "doc",
            &src,
            &trg,
            &seq(&[1]),
            &seq(&[1]),
        );

        assert_eq!(
            pairs,
            vec![SegmentPair::from(("Hello world.\n", "Bonjour monde.\n"))]
        );
        assert_eq!(asm.stats().pairs, 1);
        assert_eq!(asm.stats().documents, 1);
    }

    #[test]
    fn keeps_index_order() {
        let src = segments(&["a\n", "b\n", "c\n"]);
        let trg = segments(&["x\n", "y\n", "z\n"]);
        let mut asm = Assembler::new();
        let pairs = asm.assemble(
            "doc",
            &src,
            &trg,
            &seq(&[1, 2, 3]),
            &seq(&[3, 1, 2]),
        );
        assert_eq!(
            pairs,
            vec![
                SegmentPair::from(("a\n", "z\n")),
                SegmentPair::from(("b\n", "x\n")),
                SegmentPair::from(("c\n", "y\n")),
            ]
        );
    }

    #[test]
    fn skips_unmatched() {
        let src = segments(&["a\n", "b\n"]);
        let trg = segments(&["x\n", "y\n"]);
        let mut asm = Assembler::new();
        let pairs = asm.assemble(
            "doc",
            &src,
            &trg,
            &seq(&[-1, 1, 2, 0]),
            &seq(&[1, -1, 2, 2]),
        );
        assert_eq!(pairs, vec![SegmentPair::from(("b\n", "y\n"))]);
        assert_eq!(asm.stats().unmatched, 3);
        assert_eq!(asm.stats().out_of_range, 0);
    }

    #[test]
    fn skips_out_of_range() {
        let src = segments(&["a\n", "b\n"]);
        let trg = segments(&["x\n"]);
        let mut asm = Assembler::new();
        let pairs = asm.assemble(
            "stale_doc",
            &src,
            &trg,
            &seq(&[1, 3, 2]),
            &seq(&[1, 1, 2]),
        );
        assert_eq!(pairs, vec![SegmentPair::from(("a\n", "x\n"))]);
        assert_eq!(asm.stats().out_of_range, 2);
        assert_eq!(asm.stats().pairs, 1);
    }

    #[test]
    fn out_of_range_diagnostic() {
        capture_logs();
        let src = segments(&["a\n", "b\n"]);
        let trg = segments(&["x\n"]);
        let mut asm = Assembler::new();
        asm.assemble("versioned_doc", &src, &trg, &seq(&[3, 2]), &seq(&[1, 2]));

        assert_eq!(
            logged("versioned_doc"),
            vec![
                (
                    Level::Error,
                    "Pair: versioned_doc, source index: 3, target index: 1".to_string()
                ),
                (
                    Level::Error,
                    "Pair: versioned_doc, source index: 2, target index: 2".to_string()
                ),
            ]
        );
    }

    #[test]
    fn length_mismatch() {
        let src = segments(&["a\n", "b\n", "c\n"]);
        let trg = segments(&["x\n", "y\n", "z\n"]);
        let mut asm = Assembler::new();
        let pairs = asm.assemble(
            "doc",
            &src,
            &trg,
            &seq(&[1, 2, 3]),
            &seq(&[1]),
        );
        assert_eq!(pairs, vec![SegmentPair::from(("a\n", "x\n"))]);
        assert_eq!(asm.stats().length_mismatches, 1);
        assert_eq!(asm.stats().truncated, 2);
    }

    #[test]
    fn length_mismatch_diagnostic() {
        capture_logs();
        let src = segments(&["a\n", "b\n"]);
        let trg = segments(&["x\n", "y\n"]);
        let mut asm = Assembler::new();
        asm.assemble("short_doc", &src, &trg, &seq(&[1]), &seq(&[1, 2]));

        let records = logged("short_doc");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Level::Error);
        assert!(records[0].1.contains("1 source, 2 target"));
    }

    #[test]
    fn stats_accumulate() {
        let src = segments(&["a\n"]);
        let trg = segments(&["x\n"]);
        let mut asm = Assembler::new();
        for _ in 0..3 {
            asm.assemble("doc", &src, &trg, &seq(&[1]), &seq(&[1]));
        }
        let stats = asm.into_stats();
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.pairs, 3);
    }
}
