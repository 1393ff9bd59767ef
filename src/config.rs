//! Run configuration.
//!
//! The configuration is a TOML file read once at startup and shared by every stage:
//!
//! ```toml
//! source_language = "en"
//! target_language = "fr"
//! corpus_title = "europarl"
//! preprocessed_source_data_directory = "data/preprocessed"
//! source_data_directory = "data"
//! work_directory = "work"
//! alignment_index_directory = "idx"
//! output_data_directory = "out"
//! aligner = ["perl", "bsa/align-sents-all-multi-file.pl"]
//! ```
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::Error;
use crate::lang::LangPair;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source_language: String,
    pub target_language: String,
    pub corpus_title: String,

    /// Files handed to the aligner (`<title>_<lang>.snt`).
    pub preprocessed_source_data_directory: PathBuf,

    /// Root of original files, read from its `snt` subfolder.
    pub source_data_directory: PathBuf,

    /// Root of original files used when building the corpus.
    /// Defaults to [Config::source_data_directory].
    #[serde(default)]
    pub original_source_data_directory: Option<PathBuf>,

    pub work_directory: PathBuf,
    pub alignment_index_directory: PathBuf,
    pub output_data_directory: PathBuf,

    /// Program and leading arguments of the external aligner.
    /// The work directory and both language codes are appended.
    #[serde(default)]
    pub aligner: Vec<String>,
}

impl Config {
    /// Read and validate a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading configuration from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("could not read configuration {:?}: {}", path, e))
        })?;
        content.parse()
    }

    /// Check settings that every stage relies on.
    pub fn validate(&self) -> Result<(), Error> {
        self.lang_pair()?;

        let title = &self.corpus_title;
        if title.is_empty() {
            return Err(Error::Config("empty corpus title".to_string()));
        }
        if title.contains('/') || title.contains(std::path::MAIN_SEPARATOR) {
            return Err(Error::Config(format!(
                "corpus title {:?} contains a path separator",
                title
            )));
        }
        Ok(())
    }

    /// Language pair of the run.
    pub fn lang_pair(&self) -> Result<LangPair, Error> {
        LangPair::new(&self.source_language, &self.target_language)
    }

    /// Root of the original files read by the corpus builder.
    pub fn original_source_data_directory(&self) -> &Path {
        self.original_source_data_directory
            .as_deref()
            .unwrap_or(&self.source_data_directory)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
