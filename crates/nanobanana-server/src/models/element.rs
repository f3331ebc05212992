//! Element request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Create Element request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateElementRequest {
    /// Must start with `@`, e.g. `@Riley`
    pub handle: String,
    /// Base64 image data, optionally with a `data:` URI prefix
    pub base64_image: String,
}

/// Element response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ElementResponse {
    pub id: Uuid,
    pub user_id: String,
    pub handle: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<nanobanana::Element> for ElementResponse {
    fn from(element: nanobanana::Element) -> Self {
        Self {
            id: element.id,
            user_id: element.user_id,
            handle: element.handle,
            image_url: element.image_url,
            created_at: element.created_at,
            updated_at: element.updated_at,
        }
    }
}

/// Delete Element response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteElementResponse {
    pub success: bool,
}
