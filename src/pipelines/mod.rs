//! Pipelines.
//!
//! Each stage of the corpus generation is a [Pipeline], reading the files
//! written by the previous stage:
//!
//! 1. [Align]: runs the external aligner,
//! 1. [Index]: maps aligned lines to original line numbers,
//! 1. [Build]: assembles the combined parallel corpus,
//! 1. [Unique]: deduplicates the combined corpus.
//!
//! [Full] chains them.
mod align;
mod build;
mod full;
mod index;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod unique;

pub use align::{Align, AlignReport};
pub use build::{Build, BuildReport};
pub use full::{Full, FullReport};
pub use index::{Index, IndexReport};
pub use pipeline::Pipeline;
pub use unique::{Unique, UniqueReport};
