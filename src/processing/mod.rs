/*! Content processing

Structures and functions turning aligner output into a parallel corpus:

1. [reconcile] maps aligned lines back to original line numbers ([IndexSequence]),
1. [assemble] pairs up source and target segments using two [IndexSequence]s,
1. [dedup] removes duplicate and empty [SegmentPair]s.

Nothing here touches the file system except [IndexSequence] persistence.
!*/
pub mod assemble;
pub mod dedup;
pub mod index;
pub mod reconcile;
mod segment;

pub use assemble::{AssembleStats, Assembler};
pub use dedup::{DedupStats, Deduplicator, Verdict};
pub use index::{IndexSequence, UNMATCHED};
pub use reconcile::reconcile;
pub use segment::SegmentPair;
