//! Per-segment outcomes, recorded once each, in segment order.
mod entry;
mod failure;
mod outcome;
mod report;

pub use entry::*;
pub use failure::*;
pub use outcome::*;
pub use report::*;
