use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_session, sign_in, sign_out};
use crate::middleware::auth::AuthState;

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/session", get(get_session))
        .route("/sign-out", post(sign_out))
        .with_state(auth)
}
