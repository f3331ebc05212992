//! imgbb image hosting
//!
//! The generation backend only accepts reference images by public URL, so
//! element images are published to imgbb before they are stored.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart::Form, Client};
use serde::Deserialize;

use nanobanana::{DomainError, ImageHost};

const UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// imgbb implementation of ImageHost
pub struct ImgbbHost {
    client: Client,
    api_key: String,
    upload_url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    data: Option<UploadData>,
}

#[derive(Deserialize)]
struct UploadData {
    url: String,
}

impl ImgbbHost {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.into(),
            upload_url: UPLOAD_URL.to_string(),
        }
    }
}

/// Drop a `data:image/png;base64,` style prefix if present
pub fn strip_data_uri(base64_image: &str) -> &str {
    match base64_image.split_once(',') {
        Some((_, data)) => data,
        None => base64_image,
    }
}

fn hosted_url(response: UploadResponse) -> Result<String, DomainError> {
    match response.data {
        Some(data) if response.success => Ok(data.url),
        _ => Err(DomainError::ExternalService(
            "imgbb upload failed: API returned unsuccessful status".to_string(),
        )),
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    async fn upload(&self, base64_image: &str) -> Result<String, DomainError> {
        let form = Form::new()
            .text("key", self.api_key.clone())
            .text("image", strip_data_uri(base64_image).to_string());

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("imgbb upload failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("imgbb upload failed with status {}", status);
            return Err(DomainError::ExternalService(format!(
                "imgbb upload failed: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            )));
        }

        let payload: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid imgbb response: {e}")))?;

        hosted_url(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri("AAAA"), "AAAA");
    }

    #[test]
    fn test_hosted_url_success() {
        let payload: UploadResponse = serde_json::from_value(serde_json::json!({
            "data": {
                "id": "abc",
                "url": "https://i.ibb.co/abc/riley.png",
                "display_url": "https://i.ibb.co/abc/riley.png",
                "delete_url": "https://ibb.co/abc/delete"
            },
            "success": true,
            "status": 200
        }))
        .unwrap();
        assert_eq!(hosted_url(payload).unwrap(), "https://i.ibb.co/abc/riley.png");
    }

    #[test]
    fn test_hosted_url_unsuccessful() {
        let payload: UploadResponse = serde_json::from_value(serde_json::json!({
            "success": false,
            "status": 400,
            "error": { "message": "Invalid API key" }
        }))
        .unwrap();
        assert!(matches!(
            hosted_url(payload),
            Err(DomainError::ExternalService(_))
        ));
    }
}
