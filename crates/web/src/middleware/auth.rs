use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::WebError;
use crate::features::auth::{credentials::AdminCredentials, sessions::SessionStore};

/// Everything the admin gate needs to decide whether a caller may write
#[derive(Clone)]
pub struct AuthState {
    pub api_keys: Arc<ApiKeys>,
    pub sessions: SessionStore,
    pub admin: Arc<AdminCredentials>,
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Admits requests bearing a live admin session or a configured API key
pub async fn require_auth(
    State(auth): State<AuthState>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let Some(token) = bearer_token(request.headers()) else {
        return Err(WebError::Unauthorized("Missing bearer token".to_string()));
    };

    if auth.api_keys.is_valid(token) || auth.sessions.get(token).is_some() {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Rejected write with invalid or expired token");
        Err(WebError::Unauthorized("Invalid or expired token".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}
