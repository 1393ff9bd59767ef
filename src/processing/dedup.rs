/*! Deduplication

Pairs are identified by a SHA-256 fingerprint of `trim(source) + '\t' + trim(target)`.
The first occurrence of a fingerprint is kept verbatim (untrimmed), later ones are suppressed.
Pairs whose both sides are blank are always dropped.

Memory: one 32-byte digest and one `u64` count are held per *distinct* pair,
so memory grows with the number of unique pairs of the corpus, not with its size.
Fingerprint collisions are not checked for.
!*/
use std::collections::HashMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::processing::SegmentPair;

pub type Fingerprint = [u8; 32];

/// Fingerprint of a pair of segments, ignoring leading/trailing whitespace.
pub fn fingerprint(source: &str, target: &str) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(source.trim().as_bytes());
    hasher.update(b"\t");
    hasher.update(target.trim().as_bytes());

    let mut fp = [0u8; 32];
    fp.copy_from_slice(&hasher.finalize());
    fp
}

/// Outcome of [Deduplicator::detect].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// First occurrence, to be kept.
    Unique,
    /// Already seen.
    Duplicate,
    /// Both sides blank.
    Empty,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DedupStats {
    pub input: u64,
    pub emitted: u64,
    pub duplicates: u64,
    pub empty: u64,
}

/// Order-preserving pair deduplicator, counting occurrences.
#[derive(Debug)]
pub struct Deduplicator {
    counts: HashMap<Fingerprint, u64>,
    empty: Fingerprint,
    stats: DedupStats,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            empty: fingerprint("", ""),
            stats: DedupStats::default(),
        }
    }
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pair` and tell whether it has to be kept.
    pub fn detect(&mut self, pair: &SegmentPair) -> Verdict {
        self.stats.input += 1;
        let fp = fingerprint(pair.source(), pair.target());
        if fp == self.empty {
            self.stats.empty += 1;
            return Verdict::Empty;
        }

        let count = self.counts.entry(fp).or_insert(0);
        *count += 1;
        if *count == 1 {
            self.stats.emitted += 1;
            Verdict::Unique
        } else {
            self.stats.duplicates += 1;
            Verdict::Duplicate
        }
    }

    /// Filter an iterator of pairs, keeping first occurrences in their original order.
    pub fn dedup<'a, I>(&'a mut self, pairs: I) -> impl Iterator<Item = SegmentPair> + 'a
    where
        I: IntoIterator<Item = SegmentPair>,
        I::IntoIter: 'a,
    {
        pairs
            .into_iter()
            .filter(move |pair| self.detect(pair) == Verdict::Unique)
    }

    /// Number of times `pair` has been seen (0 for empty pairs).
    pub fn count(&self, pair: &SegmentPair) -> u64 {
        self.counts
            .get(&fingerprint(pair.source(), pair.target()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct pairs seen.
    pub fn nb_unique(&self) -> usize {
        self.counts.len()
    }

    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }
}

/// Deduplicate a whole corpus in memory.
pub fn dedup<I>(pairs: I) -> Vec<SegmentPair>
where
    I: IntoIterator<Item = SegmentPair>,
{
    let mut dd = Deduplicator::new();
    let unique = dd.dedup(pairs).collect();
    unique
}
