/*! Index sequences

An [IndexSequence] holds, for each line produced by the aligner, the 1-based number
of the original line it comes from, or [UNMATCHED].

Index files are newline-delimited decimal integers, with a newline after each entry:

```text
1
3
-1
4
```
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::Error;

/// Index of an aligned line that matches no original line.
pub const UNMATCHED: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSequence(Vec<i64>);

impl IndexSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }

    /// Number of entries that did not match an original line.
    pub fn nb_unmatched(&self) -> usize {
        self.0.iter().filter(|idx| **idx <= 0).count()
    }

    /// Checks that positive entries never go backwards.
    pub fn is_monotonic(&self) -> bool {
        let mut positives = self.0.iter().filter(|idx| **idx > 0);
        let mut prev = match positives.next() {
            Some(first) => first,
            None => return true,
        };
        for idx in positives {
            if idx < prev {
                return false;
            }
            prev = idx;
        }
        true
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        for idx in &self.0 {
            writeln!(w, "{}", idx)?;
        }
        Ok(())
    }

    /// Create (or truncate) the file at `path` and write the sequence into it.
    pub fn to_path(&self, path: &Path) -> Result<(), Error> {
        debug!("writing {} indices to {:?}", self.len(), path);
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()?;
        Ok(())
    }

    /// Parse an index file.
    ///
    /// Blank lines are ignored. `path` is only used for error reporting.
    pub fn from_reader<R: BufRead>(r: R, path: &Path) -> Result<Self, Error> {
        let mut indices = Vec::new();
        for (nb, line) in r.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.parse::<i64>() {
                Ok(idx) => indices.push(idx),
                Err(_) => {
                    return Err(Error::MalformedIndex {
                        path: path.to_path_buf(),
                        line: nb + 1,
                        content: line,
                    })
                }
            }
        }
        Ok(Self(indices))
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f), path)
    }
}

impl From<Vec<i64>> for IndexSequence {
    fn from(v: Vec<i64>) -> Self {
        Self(v)
    }
}
