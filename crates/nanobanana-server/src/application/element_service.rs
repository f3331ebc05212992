//! Element Application Service (Use Case)
//!
//! Orchestrates domain operations for Element management.

use std::sync::Arc;
use uuid::Uuid;

use nanobanana::{
    is_prompt_handle, validate_element_handle, DomainError, Element, ElementRepository, ImageHost,
};

/// Application service for Element operations
pub struct ElementService<R: ElementRepository> {
    repo: Arc<R>,
    host: Option<Arc<dyn ImageHost>>,
}

impl<R: ElementRepository> ElementService<R> {
    pub fn new(repo: Arc<R>, host: Option<Arc<dyn ImageHost>>) -> Self {
        Self { repo, host }
    }

    /// Get a user's Elements, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<Element>, DomainError> {
        self.repo.find_by_user(user_id).await
    }

    /// Upload the image and create a new Element
    pub async fn create(
        &self,
        user_id: &str,
        handle: String,
        base64_image: &str,
    ) -> Result<Element, DomainError> {
        validate_element_handle(&handle)?;

        if base64_image.trim().is_empty() {
            return Err(DomainError::Validation("Please select an image".to_string()));
        }

        if self.repo.find_by_handle(user_id, &handle).await?.is_some() {
            return Err(DomainError::handle_in_use());
        }

        if !is_prompt_handle(&handle) {
            tracing::warn!(
                "Element handle {} contains characters prompts do not match; it cannot be referenced",
                handle
            );
        }

        let host = self.host.as_ref().ok_or_else(|| {
            DomainError::ExternalService("Image hosting is not configured".to_string())
        })?;
        let image_url = host.upload(base64_image).await?;

        let element = Element::new(user_id, handle, image_url);
        let saved = self.repo.insert(&element).await?;

        tracing::info!("Created Element: {} ({}) for {}", saved.handle, saved.id, user_id);

        Ok(saved)
    }

    /// Delete an Element owned by the user
    pub async fn delete(&self, user_id: &str, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete_owned(user_id, id).await? {
            return Err(DomainError::element_not_found(id));
        }
        tracing::info!("Deleted Element: {} for {}", id, user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryElementRepository {
        elements: Mutex<Vec<Element>>,
    }

    #[async_trait]
    impl ElementRepository for InMemoryElementRepository {
        async fn find_by_user(&self, user_id: &str) -> Result<Vec<Element>, DomainError> {
            let mut found: Vec<Element> = self
                .elements
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.is_owned_by(user_id))
                .cloned()
                .collect();
            found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(found)
        }

        async fn find_by_handle(
            &self,
            user_id: &str,
            handle: &str,
        ) -> Result<Option<Element>, DomainError> {
            Ok(self
                .elements
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.is_owned_by(user_id) && e.handle == handle)
                .cloned())
        }

        async fn insert(&self, element: &Element) -> Result<Element, DomainError> {
            let mut elements = self.elements.lock().unwrap();
            if elements
                .iter()
                .any(|e| e.user_id == element.user_id && e.handle == element.handle)
            {
                return Err(DomainError::handle_in_use());
            }
            elements.push(element.clone());
            Ok(element.clone())
        }

        async fn delete_owned(&self, user_id: &str, id: Uuid) -> Result<bool, DomainError> {
            let mut elements = self.elements.lock().unwrap();
            let before = elements.len();
            elements.retain(|e| !(e.id == id && e.is_owned_by(user_id)));
            Ok(elements.len() < before)
        }
    }

    #[derive(Default)]
    pub struct FakeHost {
        uploads: AtomicUsize,
    }

    #[async_trait]
    impl ImageHost for FakeHost {
        async fn upload(&self, _base64_image: &str) -> Result<String, DomainError> {
            let n = self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("https://i.example/{n}.png"))
        }
    }

    /// Holds every upload open long enough for concurrent creates to overlap
    struct SlowHost;

    #[async_trait]
    impl ImageHost for SlowHost {
        async fn upload(&self, _base64_image: &str) -> Result<String, DomainError> {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            Ok("https://i.example/slow.png".to_string())
        }
    }

    fn service() -> (ElementService<InMemoryElementRepository>, Arc<FakeHost>) {
        let host = Arc::new(FakeHost::default());
        let service = ElementService::new(
            Arc::new(InMemoryElementRepository::default()),
            Some(host.clone() as Arc<dyn ImageHost>),
        );
        (service, host)
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (service, host) = service();
        let element = service
            .create("alice", "@Riley".to_string(), "AAAA")
            .await
            .unwrap();

        assert_eq!(element.handle, "@Riley");
        assert_eq!(element.image_url, "https://i.example/0.png");
        assert_eq!(host.uploads.load(Ordering::SeqCst), 1);

        let listed = service.list("alice").await.unwrap();
        assert_eq!(listed, vec![element]);
        assert!(service.list("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_handle_before_upload() {
        let (service, host) = service();
        let err = service
            .create("alice", "Riley".to_string(), "AAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(host.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_handle_per_user() {
        let (service, _) = service();
        service
            .create("alice", "@Riley".to_string(), "AAAA")
            .await
            .unwrap();

        let err = service
            .create("alice", "@Riley".to_string(), "BBBB")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Another user may reuse the handle
        assert!(service
            .create("bob", "@Riley".to_string(), "CCCC")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_creates_store_one_handle() {
        let service = ElementService::new(
            Arc::new(InMemoryElementRepository::default()),
            Some(Arc::new(SlowHost) as Arc<dyn ImageHost>),
        );

        let (a, b) = tokio::join!(
            service.create("alice", "@Riley".to_string(), "AAAA"),
            service.create("alice", "@Riley".to_string(), "BBBB"),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let err = a.err().or(b.err()).unwrap();
        assert!(matches!(err, DomainError::Conflict(ref msg) if msg == nanobanana::HANDLE_IN_USE));

        let stored = service.list("alice").await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_create_accepts_hyphenated_handle() {
        let (service, _) = service();
        let element = service
            .create("alice", "@big-dog".to_string(), "AAAA")
            .await
            .unwrap();
        assert_eq!(element.handle, "@big-dog");
    }

    #[tokio::test]
    async fn test_create_without_host_fails() {
        let service =
            ElementService::new(Arc::new(InMemoryElementRepository::default()), None);
        let err = service
            .create("alice", "@Riley".to_string(), "AAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
        assert!(service.list("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_checks_ownership() {
        let (service, _) = service();
        let element = service
            .create("alice", "@Riley".to_string(), "AAAA")
            .await
            .unwrap();

        let err = service.delete("bob", element.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(service.list("alice").await.unwrap().len(), 1);

        service.delete("alice", element.id).await.unwrap();
        assert!(service.list("alice").await.unwrap().is_empty());

        let err = service.delete("alice", element.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
