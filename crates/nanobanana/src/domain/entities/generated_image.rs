//! GeneratedImage - Client-side history entry

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated image as kept in the client-side history.
///
/// `created_at` is a millisecond Unix timestamp, matching the format the
/// web client wrote to browser storage so existing history stays readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    pub base64: String,
    pub prompt: String,
    pub resolution: String,
    pub created_at: i64,
}

impl GeneratedImage {
    /// Create a new history entry with a fresh id
    pub fn new(base64: String, prompt: String, resolution: String, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            base64,
            prompt,
            resolution,
            created_at,
        }
    }
}
