//! Language pairs.
//!
//! A [LangPair] names the source and target language of a run.
//! Its [std::fmt::Display] form (`src-trg`, e.g. `en-fr`) is used to name
//! per-pair directories and corpus files.
use std::fmt;

use crate::error::Error;

/// Side of a language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPair {
    source: String,
    target: String,
}

impl LangPair {
    /// Create a new language pair, checking that both codes are usable in file names.
    pub fn new(source: &str, target: &str) -> Result<Self, Error> {
        Self::check_code(source)?;
        Self::check_code(target)?;
        if source == target {
            return Err(Error::Config(format!(
                "source and target languages are both {:?}",
                source
            )));
        }

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    /// Language codes end up in `<title>_<lang>.snt` and `<title>.<lang>.idx` file names,
    /// and titles are recovered by splitting on `_` and `.`.
    fn check_code(code: &str) -> Result<(), Error> {
        if code.is_empty() {
            return Err(Error::Config("empty language code".to_string()));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::Config(format!("invalid language code {:?}", code)));
        }
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the language code of the provided side.
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}

impl fmt::Display for LangPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
