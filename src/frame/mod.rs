//! Columnar frames and the in-memory catalog that addresses them by key.
//!
//! Frames are immutable by convention. Column storage is reference counted,
//! so reordering columns or handing a frame to many readers never copies rows.
mod catalog;
mod column;
mod frame;
mod json;
mod key;
mod kind;
mod lease;

pub use catalog::*;
pub use column::*;
pub use frame::*;
pub use json::*;
pub use key::*;
pub use kind::*;
pub use lease::*;
