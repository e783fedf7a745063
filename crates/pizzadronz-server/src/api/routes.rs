//! REST API routes.

use axum::{extract::State, routing::{get, post}, Router};
use std::sync::Arc;

use crate::api::{geometry, orders};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/uuid", get(service_id))
        // Geometry
        .route("/distanceTo", post(geometry::distance_to))
        .route("/isCloseTo", post(geometry::is_close_to))
        .route("/nextPosition", post(geometry::next_position))
        .route("/isInRegion", post(geometry::is_in_region))
        // Orders
        .route("/validateOrder", post(orders::validate_order))
        .route("/calcDeliveryPath", post(orders::calc_delivery_path))
        .route(
            "/calcDeliveryPathAsGeoJson",
            post(orders::calc_delivery_path_as_geojson),
        )
}

async fn service_id(State(state): State<Arc<AppState>>) -> String {
    state.config().service_id.clone()
}
