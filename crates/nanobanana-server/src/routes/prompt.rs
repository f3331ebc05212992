//! Prompt Routes - `@handle` reference parsing

use axum::{routing::post, Json, Router};

use nanobanana::{extract_handles, parse_prompt_for_elements};

use crate::models::{ParsePromptRequest, ParsePromptResponse};
use crate::AppState;

/// Parse a prompt into `Reference Image N` form
#[utoipa::path(
    post,
    path = "/api/prompt/parse",
    request_body = ParsePromptRequest,
    responses(
        (status = 200, description = "Parsed prompt", body = ParsePromptResponse)
    ),
    tag = "Prompt"
)]
pub async fn parse_prompt(Json(payload): Json<ParsePromptRequest>) -> Json<ParsePromptResponse> {
    let parsed = parse_prompt_for_elements(&payload.prompt);
    let handles = extract_handles(&payload.prompt);
    Json(ParsePromptResponse::new(parsed, handles))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/prompt/parse", post(parse_prompt))
}
