/*!
# IO utilities

File layout of a run, and line-oriented reading/writing of documents and corpora.
!*/
pub mod layout;
pub mod reader;
pub mod writer;

pub use layout::{Discovery, DocumentPair, Layout};
pub use writer::PairWriter;
