//! Element Routes - Reference image management
//!
//! HTTP handlers that delegate to ElementService for business logic.
//! Every handler is scoped to the authenticated user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::auth::AuthUser;
use crate::models::{CreateElementRequest, DeleteElementResponse, ElementResponse};
use crate::AppState;

/// List the caller's Elements
#[utoipa::path(
    get,
    path = "/api/elements",
    responses(
        (status = 200, description = "Elements, newest first", body = Vec<ElementResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Element"
)]
pub async fn list_elements(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<ElementResponse>>, (StatusCode, String)> {
    let elements = state
        .element_service
        .list(&user_id)
        .await
        .map_err(error_response)?;

    Ok(Json(elements.into_iter().map(Into::into).collect()))
}

/// Create a new Element
#[utoipa::path(
    post,
    path = "/api/elements",
    request_body = CreateElementRequest,
    responses(
        (status = 200, description = "Element created", body = ElementResponse),
        (status = 400, description = "Invalid handle or image"),
        (status = 409, description = "Handle already in use"),
        (status = 502, description = "Image host failure")
    ),
    tag = "Element"
)]
pub async fn create_element(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(payload): Json<CreateElementRequest>,
) -> Result<Json<ElementResponse>, (StatusCode, String)> {
    let element = state
        .element_service
        .create(&user_id, payload.handle, &payload.base64_image)
        .await
        .map_err(error_response)?;

    Ok(Json(element.into()))
}

/// Delete an Element
#[utoipa::path(
    delete,
    path = "/api/elements/{id}",
    params(("id" = Uuid, Path, description = "Element ID")),
    responses(
        (status = 200, description = "Element deleted", body = DeleteElementResponse),
        (status = 404, description = "Element not found or access denied"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Element"
)]
pub async fn delete_element(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteElementResponse>, (StatusCode, String)> {
    state
        .element_service
        .delete(&user_id, id)
        .await
        .map_err(|e| match e {
            nanobanana::DomainError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                "Element not found or access denied".to_string(),
            ),
            _ => error_response(e),
        })?;

    Ok(Json(DeleteElementResponse { success: true }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/elements", get(list_elements).post(create_element))
        .route("/api/elements/:id", delete(delete_element))
}
