//! Service Ports
//!
//! Abstract interfaces for external services.

mod image_generator;
mod image_host;

pub use image_generator::*;
pub use image_host::*;
