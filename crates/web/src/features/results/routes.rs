use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_result, list_published_results, list_results};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_result))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/published", get(list_published_results))
        .merge(protected)
}
