//! Together AI image generation
//!
//! Calls the `/v1/images/generations` endpoint and asks for base64 output.
//! Reference images ride along as `input_images`, in reference order.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use nanobanana::{DomainError, GenerationRequest, ImageGenerator};

const BASE_URL: &str = "https://api.together.xyz/v1";

/// Together AI implementation of ImageGenerator
pub struct TogetherImageGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    width: u32,
    height: u32,
    n: u32,
    response_format: &'static str,
    #[serde(skip_serializing_if = "no_images")]
    input_images: &'a [String],
}

fn no_images(images: &&[String]) -> bool {
    images.is_empty()
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

impl TogetherImageGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        // Ultra-tier renders regularly take over a minute
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point at a different API root (e.g. a proxy)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build_request<'a>(&'a self, request: &'a GenerationRequest) -> ImageGenerationRequest<'a> {
        ImageGenerationRequest {
            model: &self.model,
            prompt: &request.prompt,
            width: request.resolution.width,
            height: request.resolution.height,
            n: 1,
            response_format: "base64",
            input_images: &request.input_images,
        }
    }
}

/// First base64 image in the response, if any
fn first_image(response: ImageGenerationResponse) -> Option<String> {
    response
        .data
        .into_iter()
        .find_map(|d| d.b64_json)
        .filter(|b64| !b64.is_empty())
}

#[async_trait]
impl ImageGenerator for TogetherImageGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        let body = self.build_request(request);

        tracing::debug!(
            "Requesting {} image at {} with {} reference image(s)",
            self.model,
            request.resolution,
            request.input_images.len()
        );

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Together AI request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!("Together AI error ({}): {}", status, error_text);
            return Err(DomainError::ExternalService(format!(
                "Together AI error ({status}): {error_text}"
            )));
        }

        let payload: ImageGenerationResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid Together AI response: {e}"))
        })?;

        first_image(payload)
            .ok_or_else(|| DomainError::ExternalService("Image generation failed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanobanana::Resolution;

    fn request(input_images: Vec<String>) -> GenerationRequest {
        GenerationRequest {
            prompt: "Reference Image 1 on a beach".to_string(),
            resolution: Resolution::new(1376, 768),
            input_images,
        }
    }

    #[test]
    fn test_request_body() {
        let generator = TogetherImageGenerator::new("key", "google/gemini-3-pro-image");
        let req = request(vec!["https://i.example/a.png".to_string()]);
        let body = serde_json::to_value(generator.build_request(&req)).unwrap();

        assert_eq!(body["model"], "google/gemini-3-pro-image");
        assert_eq!(body["prompt"], "Reference Image 1 on a beach");
        assert_eq!(body["width"], 1376);
        assert_eq!(body["height"], 768);
        assert_eq!(body["n"], 1);
        assert_eq!(body["response_format"], "base64");
        assert_eq!(body["input_images"][0], "https://i.example/a.png");
    }

    #[test]
    fn test_request_body_omits_empty_input_images() {
        let generator = TogetherImageGenerator::new("key", "m");
        let req = request(Vec::new());
        let body = serde_json::to_value(generator.build_request(&req)).unwrap();
        assert!(body.get("input_images").is_none());
    }

    #[test]
    fn test_first_image() {
        let payload: ImageGenerationResponse = serde_json::from_value(serde_json::json!({
            "id": "gen-1",
            "data": [{ "index": 0, "b64_json": "aGVsbG8=" }]
        }))
        .unwrap();
        assert_eq!(first_image(payload).as_deref(), Some("aGVsbG8="));

        let empty: ImageGenerationResponse =
            serde_json::from_value(serde_json::json!({ "data": [] })).unwrap();
        assert!(first_image(empty).is_none());

        let url_only: ImageGenerationResponse = serde_json::from_value(serde_json::json!({
            "data": [{ "url": "https://example.com/x.png" }]
        }))
        .unwrap();
        assert!(first_image(url_only).is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let generator = TogetherImageGenerator::new("key", "m").with_base_url("http://proxy/v1/");
        assert_eq!(generator.base_url, "http://proxy/v1");
    }
}
