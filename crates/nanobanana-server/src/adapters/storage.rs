//! Local storage for generated images
//!
//! Files are written as `<upload_dir>/<uuid>.png` and served under `/upload`.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use nanobanana::DomainError;

/// URL prefix the upload directory is mounted at
pub const UPLOAD_ROUTE: &str = "/upload";

#[derive(Debug, Clone)]
pub struct UploadStorage {
    dir: PathBuf,
}

impl UploadStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decode and write a PNG, returning its public path
    pub async fn save_png(&self, base64_image: &str) -> Result<String, DomainError> {
        let bytes = STANDARD.decode(base64_image).map_err(|e| {
            DomainError::ExternalService(format!("Generated image is not valid base64: {e}"))
        })?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Repository(format!("Failed to create upload dir: {e}")))?;

        let file_name = format!("{}.png", Uuid::new_v4());
        tokio::fs::write(self.dir.join(&file_name), bytes)
            .await
            .map_err(|e| DomainError::Repository(format!("Failed to write image: {e}")))?;

        Ok(format!("{}/{}", UPLOAD_ROUTE, file_name))
    }
}
