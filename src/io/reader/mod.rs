/*! Reading facilities

Segments are read *with* their line terminator, so that corpus files can be written back
byte for byte.

- [LineReader]: iterates over the lines of a file, keeping terminators.
- [PairReader]: iterates over the lines of two files in lockstep.
- [read_segments]: loads a whole original document.
!*/
mod textreader;

pub use textreader::{read_segments, LineReader, PairReader};
