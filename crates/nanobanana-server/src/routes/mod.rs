//! Nano Banana API Routes
//!
//! - /api/elements - Element (reference image) management
//! - /api/image/generate - Image generation proxy
//! - /api/prompt/parse - `@handle` reference parsing
//! - /api/resolutions - Aspect ratio / quality table

use axum::http::StatusCode;
use nanobanana::DomainError;

pub mod element;
pub mod image;
pub mod prompt;
pub mod resolution;
pub mod swagger;

/// Map a domain error to an HTTP status and message
pub fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match e {
        DomainError::Validation(msg) | DomainError::Conflict(msg) => msg,
        other => other.to_string(),
    };
    if status.is_server_error() {
        tracing::error!("{}", message);
    }
    (status, message)
}
