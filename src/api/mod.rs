//! HTTP API module for the sentiment, health, and docs endpoints.

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{cors_layer, create_router};
