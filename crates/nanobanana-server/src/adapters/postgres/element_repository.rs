//! PostgreSQL implementation of ElementRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use nanobanana::{DomainError, Element, ElementRepository};

/// PostgreSQL implementation of ElementRepository
pub struct PgElementRepository {
    pool: PgPool,
}

impl PgElementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ElementRow {
    id: Uuid,
    user_id: String,
    handle: String,
    image_url: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ElementRow> for Element {
    fn from(row: ElementRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            handle: row.handle,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A duplicate `(user_id, handle)` trips `element_user_handle_key`
fn insert_error(e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::handle_in_use(),
        _ => DomainError::Repository(e.to_string()),
    }
}

#[async_trait]
impl ElementRepository for PgElementRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Element>, DomainError> {
        let rows = sqlx::query_as::<_, ElementRow>(
            "SELECT * FROM elements WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_handle(
        &self,
        user_id: &str,
        handle: &str,
    ) -> Result<Option<Element>, DomainError> {
        let row = sqlx::query_as::<_, ElementRow>(
            "SELECT * FROM elements WHERE user_id = $1 AND handle = $2 LIMIT 1",
        )
        .bind(user_id)
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, element: &Element) -> Result<Element, DomainError> {
        let row = sqlx::query_as::<_, ElementRow>(
            r#"
            INSERT INTO elements (id, user_id, handle, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(element.id)
        .bind(&element.user_id)
        .bind(&element.handle)
        .bind(&element.image_url)
        .bind(element.created_at)
        .bind(element.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(row.into())
    }

    async fn delete_owned(&self, user_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM elements WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_insert_error_is_repository_error() {
        let err = insert_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[test]
    fn test_handle_uniqueness_is_enforced_by_schema() {
        let migration =
            include_str!("../../../migrations/20250102000000_unique_element_handle.sql");
        assert!(migration.contains("CREATE UNIQUE INDEX"));
        assert!(migration.contains("elements (user_id, handle)"));
    }
}
