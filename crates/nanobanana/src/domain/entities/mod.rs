//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Element: A user-owned reference image addressable by `@handle`
//! - ParsedPrompt: A prompt with handles rewritten to positional references
//! - GeneratedImage: One entry of the client-side generation history

mod element;
mod generated_image;
mod prompt;

pub use element::*;
pub use generated_image::*;
pub use prompt::*;
