//! API layer - HTTP handlers and middleware
//!
//! - Request handlers
//! - Authentication gate
//! - Validating extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
