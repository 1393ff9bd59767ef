//! Corpus building stage
//!
//! Assembles the combined corpus from index files and original documents.
//! Documents are processed in title order, and pairs of a document are written
//! contiguously, in index order.
use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::read_segments;
use crate::io::{Layout, PairWriter};
use crate::lang::Side;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{AssembleStats, Assembler, IndexSequence};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Source index files without a target counterpart.
    pub missing_index: usize,
    #[serde(flatten)]
    pub stats: AssembleStats,
}

pub struct Build {
    layout: Layout,
}

impl Build {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl Pipeline<BuildReport> for Build {
    fn run(&self) -> Result<BuildReport, Error> {
        let layout = &self.layout;
        let langs = layout.langs();
        info!("[{}] starting corpus building", langs);

        let discovery = layout.discover_indexed()?;
        for orphan in &discovery.orphans {
            debug!("{}: missing {} index file, skipping", orphan, langs.target());
        }

        std::fs::create_dir_all(layout.output_dir())?;
        let mut writer = PairWriter::create(
            &layout.combined_path(Side::Source),
            &layout.combined_path(Side::Target),
        )?;

        let mut assembler = Assembler::new();
        for doc in &discovery.pairs {
            let source = read_segments(&layout.build_original_path(doc, Side::Source))?;
            let target = read_segments(&layout.build_original_path(doc, Side::Target))?;
            let source_indices = IndexSequence::from_path(&layout.index_path(doc, Side::Source))?;
            let target_indices = IndexSequence::from_path(&layout.index_path(doc, Side::Target))?;

            let pairs = assembler.assemble(
                doc.title(),
                &source,
                &target,
                &source_indices,
                &target_indices,
            );
            debug!("{}: {} pairs", doc.title(), pairs.len());
            for pair in &pairs {
                writer.write(pair)?;
            }
        }
        writer.flush()?;

        let report = BuildReport {
            missing_index: discovery.orphans.len(),
            stats: assembler.into_stats(),
        };
        info!(
            "[{}] corpus building done: {}",
            langs,
            serde_json::to_string(&report)?
        );
        Ok(report)
    }
}
