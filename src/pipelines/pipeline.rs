//! Pipeline trait.
use crate::error::Error;

/// Implemented by each stage and by the whole chain.
///
/// Generic over the return type so that each stage
/// can return its own report.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
