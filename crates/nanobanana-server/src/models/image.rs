//! Image generation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::GeneratedImageResult;

/// Generate image request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateImageRequest {
    /// Prompt with handles already rewritten to `Reference Image N`
    pub prompt: String,
    /// `WIDTHxHEIGHT`, e.g. `1376x768`
    pub resolution: String,
    /// Reference images (public URLs or base64), in reference order
    #[serde(default)]
    pub input_images: Vec<String>,
}

/// Generate image response
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateImageResponse {
    pub base64: String,
    /// Server path of the stored copy, under `/upload`
    pub image_url: String,
    pub prompt: String,
    pub resolution: String,
}

impl From<GeneratedImageResult> for GenerateImageResponse {
    fn from(result: GeneratedImageResult) -> Self {
        Self {
            base64: result.base64,
            image_url: result.image_url,
            prompt: result.prompt,
            resolution: result.resolution.to_string(),
        }
    }
}
