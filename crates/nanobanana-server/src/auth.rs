//! API Key Authentication (Bearer Token)
//!
//! Each key maps to a user id. Handlers read the caller from the
//! [`AuthUser`] request extension, which scopes element ownership.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

/// User id used for every request while authentication is disabled
pub const LOCAL_USER: &str = "local";

/// The authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeysError {
    #[error("API key entry must be USER_ID:KEY, got {0:?}")]
    Malformed(String),
    #[error("Duplicate API key for user {0}")]
    DuplicateKey(String),
}

/// Bearer key to user id lookup
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: HashMap<String, String>,
}

impl ApiKeys {
    /// Parse a comma-separated list of `user_id:key` pairs
    pub fn parse(raw: &str) -> Result<Self, ApiKeysError> {
        let mut keys = HashMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (user, key) = entry
                .split_once(':')
                .map(|(u, k)| (u.trim(), k.trim()))
                .filter(|(u, k)| !u.is_empty() && !k.is_empty())
                .ok_or_else(|| ApiKeysError::Malformed(entry.to_string()))?;

            if keys.insert(key.to_string(), user.to_string()).is_some() {
                return Err(ApiKeysError::DuplicateKey(user.to_string()));
            }
        }
        Ok(Self { keys })
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    fn user_for(&self, token: &str) -> Option<&str> {
        self.keys.get(token).map(String::as_str)
    }
}

/// Authentication middleware
/// Resolves the Bearer token to a user and attaches it to the request
pub async fn auth_middleware(
    State(keys): State<Arc<ApiKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if keys.is_empty() {
        // No keys configured = auth disabled (for development)
        tracing::debug!("No API keys configured, acting as {}", LOCAL_USER);
        request
            .extensions_mut()
            .insert(AuthUser(LOCAL_USER.to_string()));
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let user = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => match keys.user_for(token) {
            Some(user) => user.to_string(),
            None => {
                tracing::warn!("Invalid API key attempted");
                return Err(StatusCode::UNAUTHORIZED);
            }
        },
        None if auth_header.is_some() => {
            tracing::warn!("Invalid Authorization header format");
            return Err(StatusCode::UNAUTHORIZED);
        }
        None => {
            tracing::warn!("Missing Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    request.extensions_mut().insert(AuthUser(user));
    Ok(next.run(request).await)
}
