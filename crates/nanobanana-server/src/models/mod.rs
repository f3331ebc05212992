//! Nano Banana API Models
//!
//! - Element: Reference images addressable by `@handle`
//! - Image: Generation requests and results
//! - Prompt: Parsed prompt references
//! - Resolution: Aspect ratio / quality table

mod element;
mod image;
mod prompt;
mod resolution;

pub use element::*;
pub use image::*;
pub use prompt::*;
pub use resolution::*;
