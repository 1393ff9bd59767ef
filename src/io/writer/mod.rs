/*! Corpus and index writing.

Corpus files are written in pairs: line `i` of the source file is the translation of line `i` of the target file.
!*/
mod pairwriter;

pub use pairwriter::PairWriter;
