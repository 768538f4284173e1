use storage::dto::auth::{SessionResponse, SignInRequest};

use crate::error::{WebError, WebResult};
use crate::middleware::auth::AuthState;

/// Verifies admin credentials and opens a session
pub fn sign_in(auth: &AuthState, req: &SignInRequest) -> WebResult<SessionResponse> {
    if !auth.admin.is_configured() {
        tracing::warn!("Sign-in attempted but no admin account is configured");
    }

    if !auth.admin.verify(&req.email, &req.password) {
        tracing::warn!("Failed admin sign-in for {}", req.email);
        return Err(WebError::Unauthorized("Invalid login credentials".to_string()));
    }

    let session = auth.sessions.create(req.email.trim());
    tracing::info!("Admin {} signed in", session.email);

    Ok(session)
}
