//! Unique pairs extraction stage
//!
//! Streams the combined corpus and writes its deduplicated version.
//! Nothing is written if either combined file is missing or empty.
use std::path::Path;

use log::{error, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::PairReader;
use crate::io::{Layout, PairWriter};
use crate::lang::Side;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{DedupStats, Deduplicator, Verdict};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueReport {
    /// Set when there was no combined corpus to deduplicate.
    pub skipped: bool,
    pub distinct: usize,
    #[serde(flatten)]
    pub stats: DedupStats,
}

pub struct Unique {
    layout: Layout,
}

/// `true` if `path` is a file of at least one byte.
fn has_content(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

impl Unique {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl Pipeline<UniqueReport> for Unique {
    fn run(&self) -> Result<UniqueReport, Error> {
        let layout = &self.layout;
        let langs = layout.langs();
        let src_path = layout.combined_path(Side::Source);
        let trg_path = layout.combined_path(Side::Target);

        if !(has_content(&src_path) && has_content(&trg_path)) {
            warn!(
                "[{}] no combined corpus at {:?} and {:?}, nothing to deduplicate",
                langs, src_path, trg_path
            );
            return Ok(UniqueReport {
                skipped: true,
                ..Default::default()
            });
        }

        info!("[{}] starting deduplication", langs);
        let mut reader = PairReader::from_paths(&src_path, &trg_path)?;
        let mut writer = PairWriter::create(
            &layout.unique_path(Side::Source),
            &layout.unique_path(Side::Target),
        )?;
        let mut dd = Deduplicator::new();

        for pair in &mut reader {
            let pair = pair?;
            if dd.detect(&pair) == Verdict::Unique {
                writer.write(&pair)?;
            }
        }
        writer.flush()?;

        if reader.leftover() {
            error!(
                "[{}] {:?} and {:?} have different line counts, extra lines ignored",
                langs, src_path, trg_path
            );
        }

        let report = UniqueReport {
            skipped: false,
            distinct: dd.nb_unique(),
            stats: dd.stats().clone(),
        };
        info!(
            "[{}] deduplication done: {}",
            langs,
            serde_json::to_string(&report)?
        );
        Ok(report)
    }
}
