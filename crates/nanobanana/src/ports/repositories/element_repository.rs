//! Element Repository Port
//!
//! Abstract interface for Element persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Element};

/// Repository interface for Element entities
#[async_trait]
pub trait ElementRepository: Send + Sync {
    /// Find all Elements owned by a user, newest first
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Element>, DomainError>;

    /// Find a user's Element by exact handle
    async fn find_by_handle(
        &self,
        user_id: &str,
        handle: &str,
    ) -> Result<Option<Element>, DomainError>;

    /// Insert a new Element
    async fn insert(&self, element: &Element) -> Result<Element, DomainError>;

    /// Delete an Element only if it is owned by the user
    async fn delete_owned(&self, user_id: &str, id: Uuid) -> Result<bool, DomainError>;
}
