//! Nano Banana API Client

use anyhow::{bail, Context, Result};
use nanobanana::Element;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Nano Banana
pub struct NanoBananaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct CreateElementRequest<'a> {
    pub handle: &'a str,
    pub base64_image: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageRequest<'a> {
    pub prompt: &'a str,
    pub resolution: &'a str,
    pub input_images: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    pub base64: String,
    pub image_url: String,
    pub prompt: String,
    pub resolution: String,
}

#[derive(Debug, Deserialize)]
struct DeleteElementResponse {
    success: bool,
}

impl NanoBananaClient {
    /// Create a new API client; without a key, requests go out unauthenticated
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let resp = self
            .authorized(request)
            .send()
            .await
            .context("Failed to connect to Nano Banana API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(resp)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// List the caller's elements, newest first
    pub async fn list_elements(&self) -> Result<Vec<Element>> {
        tracing::debug!("GET /api/elements");
        let resp = self.send(self.client.get(self.url("/api/elements"))).await?;

        let elements: Vec<Element> = resp.json().await.context("Failed to parse response")?;

        Ok(elements)
    }

    /// Upload a new element
    pub async fn create_element(&self, handle: &str, base64_image: &str) -> Result<Element> {
        tracing::debug!("POST /api/elements handle={}", handle);
        let request = CreateElementRequest {
            handle,
            base64_image,
        };
        let resp = self
            .send(self.client.post(self.url("/api/elements")).json(&request))
            .await?;

        let element: Element = resp.json().await.context("Failed to parse response")?;

        Ok(element)
    }

    pub async fn delete_element(&self, id: Uuid) -> Result<()> {
        tracing::debug!("DELETE /api/elements/{}", id);
        let resp = self
            .send(self.client.delete(self.url(&format!("/api/elements/{}", id))))
            .await?;

        let body: DeleteElementResponse =
            resp.json().await.context("Failed to parse response")?;
        if !body.success {
            bail!("Server did not delete element {}", id);
        }

        Ok(())
    }

    /// Generate an image; `input_images` are URLs or data URIs in reference order
    pub async fn generate(
        &self,
        prompt: &str,
        resolution: &str,
        input_images: &[String],
    ) -> Result<GenerateImageResponse> {
        tracing::debug!(
            "POST /api/image/generate resolution={} images={}",
            resolution,
            input_images.len()
        );
        let request = GenerateImageRequest {
            prompt,
            resolution,
            input_images,
        };
        let resp = self
            .send(self.client.post(self.url("/api/image/generate")).json(&request))
            .await?;

        let image: GenerateImageResponse =
            resp.json().await.context("Failed to parse response")?;

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = NanoBananaClient::new("http://localhost:8000/", None);
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_generate_request_wire_format() {
        let images = vec!["https://i.ibb.co/x.png".to_string()];
        let request = GenerateImageRequest {
            prompt: "Reference Image 1 on a beach",
            resolution: "1376x768",
            input_images: &images,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "Reference Image 1 on a beach");
        assert_eq!(json["resolution"], "1376x768");
        assert_eq!(json["input_images"][0], "https://i.ibb.co/x.png");
    }

    #[test]
    fn test_element_response_parses_into_domain_entity() {
        let body = r#"{
            "id": "7b0f3c4e-2a51-4c7e-9d5c-0f6a1c2b3d4e",
            "user_id": "local",
            "handle": "@Riley",
            "image_url": "https://i.ibb.co/riley.png",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let element: Element = serde_json::from_str(body).unwrap();
        assert_eq!(element.handle, "@Riley");
        assert!(element.is_owned_by("local"));
    }
}
