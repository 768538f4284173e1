use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use storage::dto::auth::{SessionResponse, SignInRequest};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{AuthState, bearer_token};

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid login credentials")
    ),
    tag = "auth"
)]
pub async fn sign_in(
    State(auth): State<AuthState>,
    Json(req): Json<SignInRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let session = services::sign_in(&auth, &req)?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current admin session", body = SessionResponse),
        (status = 401, description = "No live session")
    ),
    tag = "auth"
)]
pub async fn get_session(
    State(auth): State<AuthState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let session = bearer_token(&headers)
        .and_then(|token| auth.sessions.get(token))
        .ok_or_else(|| WebError::Unauthorized("No active session".to_string()))?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session revoked")
    ),
    tag = "auth"
)]
pub async fn sign_out(State(auth): State<AuthState>, headers: HeaderMap) -> Response {
    if let Some(token) = bearer_token(&headers)
        && auth.sessions.revoke(token)
    {
        tracing::info!("Admin session signed out");
    }

    StatusCode::NO_CONTENT.into_response()
}
