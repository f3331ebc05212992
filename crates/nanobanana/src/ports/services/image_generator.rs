//! Image Generator Port
//!
//! Abstract interface for text-to-image generation.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Resolution};

/// A single generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub resolution: Resolution,
    /// Reference images as public URLs or base64 data, in reference order
    pub input_images: Vec<String>,
}

/// Service interface for image generation backends
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image, returned as base64-encoded PNG data
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError>;
}
