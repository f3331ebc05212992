//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod aspect_ratio;
mod handle;
mod quality;
mod resolution;

pub use aspect_ratio::*;
pub use handle::*;
pub use quality::*;
pub use resolution::*;
