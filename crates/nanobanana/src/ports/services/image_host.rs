//! Image Host Port
//!
//! Abstract interface for publishing images at a public URL.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for image hosting
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload base64 image data (a `data:` URI prefix is allowed) and return its public URL
    async fn upload(&self, base64_image: &str) -> Result<String, DomainError>;
}
