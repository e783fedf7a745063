//! Flat-plane geometry for drone movement.
//!
//! Degrees are treated as a Cartesian space, not a sphere. Every distance
//! threshold in the system uses the same degree unit, so no projection is
//! applied anywhere.

use crate::models::{NamedRegion, Position};

/// Distance a drone covers in one move, in degrees.
pub const STEP: f64 = 0.00015;

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    let d_lng = a.lng - b.lng;
    let d_lat = a.lat - b.lat;
    (d_lng * d_lng + d_lat * d_lat).sqrt()
}

/// Two positions are close when they are less than one step apart.
pub fn is_close(a: Position, b: Position) -> bool {
    distance(a, b) < STEP
}

/// Bearing from `from` to `to` in radians (0 = east, counter-clockwise).
pub fn bearing_towards(from: Position, to: Position) -> f64 {
    (to.lat - from.lat).atan2(to.lng - from.lng)
}

/// Move exactly one step from `from` along `bearing_rad`.
pub fn move_by(from: Position, bearing_rad: f64) -> Position {
    Position {
        lng: from.lng + STEP * bearing_rad.cos(),
        lat: from.lat + STEP * bearing_rad.sin(),
    }
}

/// Move exactly one step from `start` along an angle given in degrees.
pub fn next_position(start: Position, angle_deg: f64) -> Position {
    move_by(start, angle_deg.to_radians())
}

/// Crossing-number point-in-polygon test.
///
/// Edges wrap from the last vertex back to the first. Points exactly on an
/// edge get whatever the strict `>` / `<` comparisons below yield; there is
/// no edge-inclusive policy.
pub fn point_in_polygon(point: Position, vertices: &[Position]) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (vertices[i].lng, vertices[i].lat);
        let (xj, yj) = (vertices[j].lng, vertices[j].lat);

        if ((yi > point.lat) != (yj > point.lat))
            && (point.lng < (xj - xi) * (point.lat - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// True if the point lies inside any of the regions.
pub fn in_any_region(point: Position, regions: &[NamedRegion]) -> bool {
    regions.iter().any(|region| region.contains(point))
}
