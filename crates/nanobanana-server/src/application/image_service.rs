//! Image Application Service (Use Case)
//!
//! Validates a generation request, calls the generator, and keeps a copy
//! of the result in local upload storage.

use std::sync::Arc;

use nanobanana::{DomainError, GenerationRequest, ImageGenerator, Resolution};

use crate::adapters::UploadStorage;

/// Result of a successful generation
#[derive(Debug, Clone)]
pub struct GeneratedImageResult {
    pub base64: String,
    pub image_url: String,
    pub prompt: String,
    pub resolution: Resolution,
}

/// Application service for image generation
pub struct ImageService {
    generator: Option<Arc<dyn ImageGenerator>>,
    storage: UploadStorage,
}

impl ImageService {
    pub fn new(generator: Option<Arc<dyn ImageGenerator>>, storage: UploadStorage) -> Self {
        Self { generator, storage }
    }

    /// Generate an image from an already-cleaned prompt
    pub async fn generate(
        &self,
        prompt: String,
        resolution: &str,
        input_images: Vec<String>,
    ) -> Result<GeneratedImageResult, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::Validation("Prompt must not be empty".to_string()));
        }
        let resolution: Resolution = resolution.parse().map_err(DomainError::Validation)?;

        let generator = self.generator.as_ref().ok_or_else(|| {
            DomainError::ExternalService("Image generation is not configured".to_string())
        })?;

        let request = GenerationRequest {
            prompt,
            resolution,
            input_images,
        };
        let base64 = generator.generate(&request).await?;
        let image_url = self.storage.save_png(&base64).await?;

        tracing::info!(
            "Generated {} image with {} reference(s): {}",
            resolution,
            request.input_images.len(),
            image_url
        );

        Ok(GeneratedImageResult {
            base64,
            image_url,
            prompt: request.prompt,
            resolution,
        })
    }
}
