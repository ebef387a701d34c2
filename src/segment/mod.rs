//! Segment keys and the extraction of per-segment partitions.
//!
//! The key frame holds one row per segment. Each key row selects the rows of
//! a (reordered) data frame whose leading columns equal it, missing matching
//! missing; those rows become the segment's [`Partition`].
mod keys;
mod matcher;
mod partition;
mod row;

pub use keys::*;
pub use matcher::*;
pub use partition::*;
pub use row::*;
