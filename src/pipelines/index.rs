//! Index stage
//!
//! For each document aligned in both languages, maps aligned lines back to
//! original line numbers and writes one index file per language.
use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::read_segments;
use crate::io::{DocumentPair, Layout};
use crate::lang::Side;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::reconcile;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub documents: usize,
    /// Source aligned files without a target counterpart.
    pub orphans: usize,
    pub aligned_lines: usize,
    pub unmatched_lines: usize,
}

pub struct Index {
    layout: Layout,
}

impl Index {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    fn index_document(&self, doc: &DocumentPair, report: &mut IndexReport) -> Result<(), Error> {
        for side in [Side::Source, Side::Target] {
            let original = read_segments(&self.layout.original_path(doc, side))?;
            let aligned = read_segments(&self.layout.aligned_path(doc, side))?;

            let indices = reconcile(&original, &aligned);
            debug!(
                "{} ({}): {} aligned lines, {} unmatched",
                doc.title(),
                self.layout.langs().get(side),
                indices.len(),
                indices.nb_unmatched()
            );
            report.aligned_lines += indices.len();
            report.unmatched_lines += indices.nb_unmatched();

            indices.to_path(&self.layout.index_path(doc, side))?;
        }
        Ok(())
    }
}

impl Pipeline<IndexReport> for Index {
    fn run(&self) -> Result<IndexReport, Error> {
        let langs = self.layout.langs();
        info!("[{}] starting index reconciliation", langs);
        std::fs::create_dir_all(self.layout.index_dir())?;

        let discovery = self.layout.discover_aligned()?;
        let mut report = IndexReport {
            orphans: discovery.orphans.len(),
            ..Default::default()
        };

        for doc in &discovery.pairs {
            self.index_document(doc, &mut report)?;
            report.documents += 1;
        }

        info!(
            "[{}] index reconciliation done: {}",
            langs,
            serde_json::to_string(&report)?
        );
        Ok(report)
    }
}
