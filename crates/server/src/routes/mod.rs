//! HTTP route handlers for the address API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health           - Liveness check
//!
//! # Addresses
//! POST   /addresses        - Create address (201 / 400)
//! GET    /addresses        - List all addresses (200)
//! GET    /addresses/{id}   - Get address by id (200 / 404)
//! PUT    /addresses/{id}   - Partial update (200 / 400 / 404)
//! DELETE /addresses/{id}   - Delete, idempotent (204)
//! ```

pub mod addresses;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/addresses", post(addresses::create).get(addresses::list))
        .route(
            "/addresses/{id}",
            get(addresses::get_by_id)
                .put(addresses::update)
                .delete(addresses::delete),
        )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the store.
async fn health() -> &'static str {
    "ok"
}
