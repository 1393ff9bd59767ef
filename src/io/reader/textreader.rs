use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;
use crate::processing::SegmentPair;

/// Reader that yields lines, including their trailing `\n` (or `\r\n`) when present.
#[derive(Debug)]
pub struct LineReader<T> {
    br: T,
}

impl LineReader<BufReader<File>> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<T> LineReader<T>
where
    T: BufRead,
{
    pub fn new(br: T) -> Self {
        Self { br }
    }
}

impl<T> Iterator for LineReader<T>
where
    T: BufRead,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut s = String::new();
        match self.br.read_line(&mut s) {
            Ok(0) => None,
            Ok(_) => Some(Ok(s)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

/// Load every line of an original document.
///
/// Position `i` of the returned [Vec] holds line `i + 1` of the file.
pub fn read_segments(path: &Path) -> Result<Vec<String>, Error> {
    LineReader::from_path(path)?.collect()
}

/// Reads two line-aligned files in lockstep, yielding [SegmentPair]s.
///
/// Iteration stops at the end of the shortest file;
/// [PairReader::leftover] tells whether the other one still had lines.
#[derive(Debug)]
pub struct PairReader<T> {
    source: LineReader<T>,
    target: LineReader<T>,
    leftover: bool,
}

impl PairReader<BufReader<File>> {
    pub fn from_paths(source: &Path, target: &Path) -> Result<Self, Error> {
        Ok(Self::new(
            LineReader::from_path(source)?,
            LineReader::from_path(target)?,
        ))
    }
}

impl<T> PairReader<T>
where
    T: BufRead,
{
    pub fn new(source: LineReader<T>, target: LineReader<T>) -> Self {
        Self {
            source,
            target,
            leftover: false,
        }
    }

    /// `true` once iteration has ended while one of both files still had lines.
    pub fn leftover(&self) -> bool {
        self.leftover
    }
}

impl<T> Iterator for PairReader<T>
where
    T: BufRead,
{
    type Item = Result<SegmentPair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.source.next(), self.target.next()) {
            (Some(Ok(source)), Some(Ok(target))) => Some(Ok(SegmentPair::new(source, target))),
            (Some(Err(e)), _) | (_, Some(Err(e))) => Some(Err(e)),
            (None, None) => None,
            (Some(_), None) | (None, Some(_)) => {
                self.leftover = true;
                None
            }
        }
    }
}
