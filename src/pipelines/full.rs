//! Whole chain: alignment, index reconciliation, corpus building and deduplication.
//!
//! Stages still exchange data through the files they write,
//! so that a failed run can be resumed from any stage.
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::io::Layout;
use crate::pipelines::{
    Align, AlignReport, Build, BuildReport, Index, IndexReport, Pipeline, Unique, UniqueReport,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FullReport {
    pub align: Option<AlignReport>,
    pub index: IndexReport,
    pub build: BuildReport,
    pub unique: UniqueReport,
}

pub struct Full {
    align: Option<Align>,
    index: Index,
    build: Build,
    unique: Unique,
}

impl Full {
    /// Set `skip_align` to reuse the aligned files of a previous run.
    pub fn new(config: &Config, skip_align: bool) -> Result<Self, Error> {
        let layout = Layout::new(config)?;
        let align = if skip_align {
            None
        } else {
            Some(Align::new(layout.clone(), config.aligner.clone())?)
        };

        Ok(Self {
            align,
            index: Index::new(layout.clone()),
            build: Build::new(layout.clone()),
            unique: Unique::new(layout),
        })
    }
}

impl Pipeline<FullReport> for Full {
    fn run(&self) -> Result<FullReport, Error> {
        let align = match &self.align {
            Some(align) => Some(align.run()?),
            None => {
                info!("skipping alignment");
                None
            }
        };

        Ok(FullReport {
            align,
            index: self.index.run()?,
            build: self.build.run()?,
            unique: self.unique.run()?,
        })
    }
}
