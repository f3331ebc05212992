//! Resolution Routes - Aspect ratio / quality table

use axum::{routing::get, Json, Router};

use crate::models::ResolutionsResponse;
use crate::AppState;

/// List supported aspect ratios and their output sizes
#[utoipa::path(
    get,
    path = "/api/resolutions",
    responses(
        (status = 200, description = "Resolution table", body = ResolutionsResponse)
    ),
    tag = "Image"
)]
pub async fn list_resolutions() -> Json<ResolutionsResponse> {
    Json(ResolutionsResponse::table())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/resolutions", get(list_resolutions))
}
