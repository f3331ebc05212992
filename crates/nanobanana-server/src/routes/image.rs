//! Image Routes - Generation proxy

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use super::error_response;
use crate::models::{GenerateImageRequest, GenerateImageResponse};
use crate::AppState;

/// Generate an image
///
/// The prompt is expected to be parsed already; `input_images` must follow
/// the `Reference Image N` numbering.
#[utoipa::path(
    post,
    path = "/api/image/generate",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Image generated", body = GenerateImageResponse),
        (status = 400, description = "Empty prompt or malformed resolution"),
        (status = 502, description = "Generation backend failure")
    ),
    tag = "Image"
)]
pub async fn generate_image(
    State(state): State<AppState>,
    Json(payload): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, (StatusCode, String)> {
    let result = state
        .image_service
        .generate(payload.prompt, &payload.resolution, payload.input_images)
        .await
        .map_err(error_response)?;

    Ok(Json(result.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/image/generate", post(generate_image))
}
