//! Geometry endpoints.
//!
//! Bodies are read as raw JSON so a missing or non-numeric coordinate is
//! reported with a message naming the offending field.

use axum::{extract::rejection::JsonRejection, Json};
use pizzadronz_core::spatial;
use pizzadronz_core::{validate_position, validate_region, NamedRegion, Position};
use serde_json::Value;

use crate::api::ApiError;

type JsonBody = Result<Json<Value>, JsonRejection>;

/// Euclidean distance between `position1` and `position2`.
pub async fn distance_to(body: JsonBody) -> Result<Json<f64>, ApiError> {
    let (a, b) = position_pair(body)?;
    Ok(Json(spatial::distance(a, b)))
}

/// Whether `position1` and `position2` are within one step of each other.
pub async fn is_close_to(body: JsonBody) -> Result<Json<bool>, ApiError> {
    let (a, b) = position_pair(body)?;
    Ok(Json(spatial::is_close(a, b)))
}

/// One step from `start` along `angle` (degrees).
pub async fn next_position(body: JsonBody) -> Result<Json<Position>, ApiError> {
    let Json(body) = body?;
    let start = body.get("start").filter(|v| v.is_object());
    let angle = body.get("angle").and_then(Value::as_f64);
    let (Some(start), Some(angle)) = (start, angle) else {
        return Err(ApiError::bad_request(
            "Invalid or missing input for start or angle.",
        ));
    };

    let start = parse_position(Some(start), "start")?;
    validate_position(&start)?;
    Ok(Json(spatial::next_position(start, angle)))
}

/// Whether `position` lies inside `region`.
pub async fn is_in_region(body: JsonBody) -> Result<Json<bool>, ApiError> {
    let Json(body) = body?;
    let position = parse_position(body.get("position"), "position")?;
    validate_position(&position)?;

    let region = parse_region(body.get("region"))?;
    validate_region(&region)?;

    Ok(Json(region.contains(position)))
}

fn position_pair(body: JsonBody) -> Result<(Position, Position), ApiError> {
    let Json(body) = body?;
    let a = parse_position(body.get("position1"), "position1")?;
    let b = parse_position(body.get("position2"), "position2")?;
    validate_position(&a)?;
    validate_position(&b)?;
    Ok((a, b))
}

fn parse_position(value: Option<&Value>, field: &str) -> Result<Position, ApiError> {
    let Some(object) = value.and_then(Value::as_object) else {
        return Err(ApiError::bad_request(format!(
            "Invalid coordinate object for '{field}'"
        )));
    };

    match (
        object.get("lng").and_then(Value::as_f64),
        object.get("lat").and_then(Value::as_f64),
    ) {
        (Some(lng), Some(lat)) => Ok(Position::new(lng, lat)),
        _ => Err(ApiError::bad_request(format!(
            "Coordinates of '{field}' must be numeric: lng={}, lat={}",
            object.get("lng").unwrap_or(&Value::Null),
            object.get("lat").unwrap_or(&Value::Null)
        ))),
    }
}

fn parse_region(value: Option<&Value>) -> Result<NamedRegion, ApiError> {
    let Some(vertices) = value
        .and_then(|region| region.get("vertices"))
        .and_then(Value::as_array)
    else {
        return Err(ApiError::bad_request("Region must have a list of vertices."));
    };

    let name = value
        .and_then(|region| region.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    let vertices = vertices
        .iter()
        .enumerate()
        .map(|(idx, vertex)| parse_position(Some(vertex), &format!("vertices[{idx}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NamedRegion::new(name, vertices))
}
