//! Alignment stage
//!
//! Copies the documents available in both languages into a fresh work directory,
//! then runs the external aligner on it.
//!
//! The aligner is invoked as `<command...> <work dir> <source lang> <target lang>`
//! and is expected to write a `<title>_<lang>.snt.aligned` file next to each input.
//! Its standard output and error go to the aligner log file.
//! The call blocks until the aligner exits.
use std::fs::File;
use std::process::{Command, Stdio};

use log::{debug, error, info};
use serde::Serialize;

use crate::error::Error;
use crate::io::{Discovery, Layout};
use crate::lang::Side;
use crate::pipelines::pipeline::Pipeline;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AlignReport {
    /// Documents copied into the work directory.
    pub documents: usize,
    /// Source documents without a target counterpart.
    pub orphans: usize,
}

pub struct Align {
    layout: Layout,
    command: Vec<String>,
}

impl Align {
    pub fn new(layout: Layout, command: Vec<String>) -> Result<Self, Error> {
        if command.is_empty() {
            return Err(Error::Config("no aligner command configured".to_string()));
        }
        Ok(Self { layout, command })
    }

    /// Recreate the work directory and copy documents into it.
    fn prepare(&self) -> Result<Discovery, Error> {
        let discovery = self.layout.discover_preprocessed()?;
        for orphan in &discovery.orphans {
            debug!("{}: no target document, skipping", orphan);
        }

        let work_dir = self.layout.work_dir();
        if work_dir.exists() {
            debug!("removing previous work directory {:?}", work_dir);
            std::fs::remove_dir_all(&work_dir)?;
        }
        std::fs::create_dir_all(&work_dir)?;

        for doc in &discovery.pairs {
            for side in [Side::Source, Side::Target] {
                std::fs::copy(
                    self.layout.preprocessed_path(doc, side),
                    self.layout.work_path(doc, side),
                )?;
            }
        }
        Ok(discovery)
    }

    fn run_aligner(&self) -> Result<(), Error> {
        let log_path = self.layout.aligner_log_path();
        let log = File::create(&log_path)?;
        let log_err = log.try_clone()?;

        let langs = self.layout.langs();
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| Error::Config("no aligner command configured".to_string()))?;

        let mut process = Command::new(program);
        process
            .args(args)
            .arg(self.layout.work_dir())
            .arg(langs.source())
            .arg(langs.target())
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(log_err));

        info!("[{}] running aligner, logging to {:?}", langs, log_path);
        debug!("aligner command: {:?}", process);
        let status = process
            .status()
            .map_err(|e| Error::Aligner(format!("could not run {:?}: {}", program, e)))?;

        if !status.success() {
            error!(
                "[{}] aligner failed ({}), see {:?}",
                langs, status, log_path
            );
            return Err(Error::Aligner(format!("aligner exited with {}", status)));
        }
        Ok(())
    }
}

impl Pipeline<AlignReport> for Align {
    fn run(&self) -> Result<AlignReport, Error> {
        let langs = self.layout.langs();
        info!("[{}] preparing alignment", langs);
        let discovery = self.prepare()?;
        info!(
            "[{}] {} documents to align",
            langs,
            discovery.pairs.len()
        );

        self.run_aligner()?;

        let report = AlignReport {
            documents: discovery.pairs.len(),
            orphans: discovery.orphans.len(),
        };
        info!(
            "[{}] alignment done: {}",
            langs,
            serde_json::to_string(&report)?
        );
        Ok(report)
    }
}
