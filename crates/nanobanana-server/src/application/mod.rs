//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod element_service;
mod image_service;

pub use element_service::ElementService;
pub use image_service::{GeneratedImageResult, ImageService};
