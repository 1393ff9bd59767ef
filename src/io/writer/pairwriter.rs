use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::Error;
use crate::processing::SegmentPair;

/// Writes [SegmentPair]s into two parallel streams.
///
/// Segments are written verbatim. A segment lacking a final newline
/// (last line of a file) gets one, so that both streams stay line-aligned.
pub struct PairWriter<W: Write> {
    source: W,
    target: W,
}

impl PairWriter<BufWriter<File>> {
    /// Create (or truncate) both files.
    pub fn create(source: &Path, target: &Path) -> Result<Self, Error> {
        debug!("creating {:?} and {:?}", source, target);
        Ok(Self::new(
            BufWriter::new(File::create(source)?),
            BufWriter::new(File::create(target)?),
        ))
    }
}

impl<W: Write> PairWriter<W> {
    pub fn new(source: W, target: W) -> Self {
        Self { source, target }
    }

    pub fn write(&mut self, pair: &SegmentPair) -> Result<(), Error> {
        Self::write_line(&mut self.source, pair.source())?;
        Self::write_line(&mut self.target, pair.target())?;
        Ok(())
    }

    #[inline]
    fn write_line(w: &mut W, segment: &str) -> Result<(), Error> {
        w.write_all(segment.as_bytes())?;
        if !segment.ends_with('\n') {
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.source.flush()?;
        self.target.flush()?;
        Ok(())
    }
}
