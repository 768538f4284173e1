pub mod admin;
pub mod api;
pub mod auth;
pub mod backend;
pub mod error;
pub mod render;
pub mod store;

pub use admin::AdminWriter;
pub use api::ApiClient;
pub use auth::{AdminGate, AdminState, AuthProvider, AuthSubscription, Session};
pub use backend::Backend;
pub use error::{ClientError, Result};
pub use store::{Store, StoreState};
