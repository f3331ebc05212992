//! Domain Errors
//!
//! Validation and Conflict carry the message shown to the user as-is.

use thiserror::Error;
use uuid::Uuid;

pub const HANDLE_IN_USE: &str = "This handle is already in use";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found or access denied: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Element store failure: {0}")]
    Repository(String),

    #[error("Upstream service failure: {0}")]
    ExternalService(String),
}

impl DomainError {
    /// The element is missing or belongs to another user
    pub fn element_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "Element".to_string(),
            id: id.to_string(),
        }
    }

    /// The user already owns an element with this handle
    pub fn handle_in_use() -> Self {
        Self::Conflict(HANDLE_IN_USE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DomainError::element_not_found(Uuid::nil()).to_string(),
            "Element not found or access denied: 00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(DomainError::handle_in_use().to_string(), HANDLE_IN_USE);
        assert_eq!(
            DomainError::ExternalService("imgbb down".into()).to_string(),
            "Upstream service failure: imgbb down"
        );
    }
}
