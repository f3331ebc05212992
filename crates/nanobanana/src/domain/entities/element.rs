//! Element - A reference image addressable by `@handle`
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Element - a user-owned image stored on the image host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    pub id: Uuid,
    pub user_id: String,
    /// Stored with the `@` prefix, e.g. `@Riley`
    pub handle: String,
    /// Public URL on the image host
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Element {
    /// Create a new Element with generated ID and timestamps
    pub fn new(user_id: impl Into<String>, handle: impl Into<String>, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            handle: handle.into(),
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this element belongs to the given user
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
