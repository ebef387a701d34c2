//! Training capability consumed once per segment.
//!
//! A [`Blueprint`] names the algorithm, the full frames and the shared
//! hyper-parameters. The [`Registry`] turns the algorithm name into a fresh
//! [`Trainer`] for each segment.
mod blueprint;
mod linear;
mod mean;
mod message;
mod model;
mod registry;
mod trainer;

pub use blueprint::*;
pub use linear::*;
pub use mean::*;
pub use message::*;
pub use model::*;
pub use registry::*;
pub use trainer::*;
