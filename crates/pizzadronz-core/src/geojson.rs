//! GeoJSON export of flight paths.

use crate::models::Position;
use serde::{Deserialize, Serialize};

/// A GeoJSON `LineString` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lng, lat]` pairs in path order
    pub coordinates: Vec<[f64; 2]>,
}

impl LineString {
    pub fn from_path(path: &[Position]) -> Self {
        Self {
            kind: "LineString".to_string(),
            coordinates: path.iter().map(|p| [p.lng, p.lat]).collect(),
        }
    }
}
