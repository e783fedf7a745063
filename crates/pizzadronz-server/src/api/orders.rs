//! Order validation and delivery path endpoints.
//!
//! Business-rule failures are ordinary 200 responses carrying the outcome
//! code; only malformed bodies, feed outages and planning failures map to
//! error statuses.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use pizzadronz_core::{DeliveryOutcome, LineString, Order, ValidatedOrder};
use std::sync::Arc;

use crate::api::ApiError;
use crate::state::AppState;

type OrderBody = Result<Json<Option<Order>>, JsonRejection>;

/// Validate an order and return it with its outcome code.
pub async fn validate_order(
    State(state): State<Arc<AppState>>,
    body: OrderBody,
) -> Result<Json<ValidatedOrder>, ApiError> {
    let Json(order) = body?;
    let order_no = order.as_ref().and_then(|o| o.order_no.clone());

    let validated = state.delivery().validate_order(order).await?;
    tracing::info!(
        "Order {:?} validated: {}",
        order_no,
        validated.order_validation_code
    );
    Ok(Json(validated))
}

/// Plan the delivery path for an order.
///
/// Invalid orders come back as the validated order instead of a path.
pub async fn calc_delivery_path(
    State(state): State<Arc<AppState>>,
    body: OrderBody,
) -> Result<Response, ApiError> {
    let Json(order) = body?;

    match state.delivery().calc_delivery_path(order).await? {
        DeliveryOutcome::Planned(path) => {
            tracing::info!("Planned delivery path with {} waypoints", path.len());
            Ok(Json(path).into_response())
        }
        DeliveryOutcome::Rejected(validated) => {
            tracing::info!(
                "No path for invalid order: {}",
                validated.order_validation_code
            );
            Ok(Json(validated).into_response())
        }
    }
}

/// Plan the delivery path for an order as a GeoJSON `LineString`.
pub async fn calc_delivery_path_as_geojson(
    State(state): State<Arc<AppState>>,
    body: OrderBody,
) -> Result<Json<LineString>, ApiError> {
    let Json(order) = body?;

    match state.delivery().calc_delivery_path(order).await? {
        DeliveryOutcome::Planned(path) => Ok(Json(LineString::from_path(&path))),
        DeliveryOutcome::Rejected(validated) => Err(ApiError::bad_request(format!(
            "Invalid order: {}",
            validated.order_validation_code
        ))),
    }
}
