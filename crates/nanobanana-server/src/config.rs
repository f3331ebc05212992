//! Server configuration
//!
//! Read once at startup from Shuttle secrets.

use std::path::PathBuf;

use anyhow::Context;

use crate::auth::ApiKeys;

pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-3-pro-image";
pub const DEFAULT_UPLOAD_DIR: &str = "upload";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_keys: ApiKeys,
    pub together_api_key: Option<String>,
    pub together_base_url: Option<String>,
    pub imgbb_api_key: Option<String>,
    pub image_model: String,
    pub upload_dir: PathBuf,
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> anyhow::Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_keys = match get("API_KEYS") {
            Some(raw) => ApiKeys::parse(&raw).context("Invalid API_KEYS secret")?,
            None => ApiKeys::default(),
        };

        Ok(Self {
            api_keys,
            together_api_key: get("TOGETHER_API_KEY"),
            together_base_url: get("TOGETHER_BASE_URL"),
            imgbb_api_key: get("IMGBB_API_KEY"),
            image_model: get("IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            cors_origin: get("CORS_ORIGIN"),
        })
    }
}
