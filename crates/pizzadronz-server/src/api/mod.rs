//! API routes for the PizzaDronz server.

pub mod error;
pub mod geometry;
pub mod orders;
mod routes;

use axum::Router;

pub use error::ApiError;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
