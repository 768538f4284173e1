use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_group, list_groups};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_group))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new().route("/", get(list_groups)).merge(protected)
}
