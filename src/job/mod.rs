//! Segment jobs: shared state, progress, and the orchestration loop.
//!
//! An [`Orchestrator`] validates its inputs on construction, then runs one
//! segment at a time: extract partitions, train, record, release. A
//! [`JobHandle`] observes progress, requests cancellation, and awaits the
//! final [`Report`](crate::report::Report).
mod handle;
mod job;
mod orchestrator;
mod phase;
mod progress;

pub use handle::*;
pub use job::*;
pub use orchestrator::*;
pub use phase::*;
pub use progress::*;
