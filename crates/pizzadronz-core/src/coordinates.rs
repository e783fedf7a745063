//! Range checks on positions and regions.

use crate::models::{NamedRegion, Position};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Longitude must be between -180 and 180 (got {0})")]
    LongitudeOutOfRange(f64),
    #[error("Latitude must be between -90 and 90 (got {0})")]
    LatitudeOutOfRange(f64),
    #[error("Region '{name}' must have at least 3 vertices (got {vertices})")]
    DegenerateRegion { name: String, vertices: usize },
}

/// Reject positions outside the legal longitude/latitude ranges.
///
/// Longitude is checked first. NaN and infinities are out of range.
pub fn validate_position(position: &Position) -> Result<(), CoordinateError> {
    if !(-180.0..=180.0).contains(&position.lng) {
        return Err(CoordinateError::LongitudeOutOfRange(position.lng));
    }
    if !(-90.0..=90.0).contains(&position.lat) {
        return Err(CoordinateError::LatitudeOutOfRange(position.lat));
    }
    Ok(())
}

/// Reject regions with fewer than three vertices or any out-of-range vertex.
pub fn validate_region(region: &NamedRegion) -> Result<(), CoordinateError> {
    if region.vertices.len() < 3 {
        return Err(CoordinateError::DegenerateRegion {
            name: region.name.clone(),
            vertices: region.vertices.len(),
        });
    }
    region.vertices.iter().try_for_each(validate_position)
}
