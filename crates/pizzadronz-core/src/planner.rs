//! Greedy stepwise flight path planning.
//!
//! The drone moves one [`STEP`] at a time straight at the destination. When
//! that step would enter a no-fly zone, a bounded sweep of bearings around the
//! direct one picks the first legal alternative. Once the drone has been
//! inside the central area it must stay there until it arrives.

use crate::coordinates::{validate_position, validate_region, CoordinateError};
use crate::models::{NamedRegion, Order, Position, Restaurant};
use crate::rules::DeliveryRules;
use crate::spatial::{bearing_towards, in_any_region, is_close, move_by, STEP};
use thiserror::Error;

/// Finest sweep the planner accepts, in degrees.
pub const MIN_SWEEP_INCREMENT_DEG: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Illegal path: exited central area after entering (at {}, {})", .at.lng, .at.lat)]
    CentralAreaExitViolation { at: Position },
    #[error("No valid path found avoiding no-fly zones (stuck at {}, {})", .at.lng, .at.lat)]
    NoLegalPathFound { at: Position },
    #[error("No path reached the destination within {steps} steps")]
    StepBudgetExhausted { steps: usize },
    #[error("Sweep increment must be between 0.01 and 360 degrees, got {0}")]
    InvalidSweepIncrement(f64),
    #[error("Invalid flight geometry: {0}")]
    InvalidGeometry(#[from] CoordinateError),
}

/// Plans paths through one snapshot of airspace.
#[derive(Debug)]
pub struct PathPlanner<'a> {
    no_fly_zones: &'a [NamedRegion],
    central_area: &'a NamedRegion,
    sweep_offsets: Vec<f64>,
    max_steps: usize,
}

impl<'a> PathPlanner<'a> {
    /// Every region is range-checked before any geometry runs on it.
    pub fn new(
        no_fly_zones: &'a [NamedRegion],
        central_area: &'a NamedRegion,
        rules: &DeliveryRules,
    ) -> Result<Self, PlanError> {
        validate_region(central_area)?;
        for zone in no_fly_zones {
            validate_region(zone)?;
        }

        let increment = rules.sweep_increment_deg;
        if !(MIN_SWEEP_INCREMENT_DEG..=360.0).contains(&increment) {
            return Err(PlanError::InvalidSweepIncrement(increment));
        }

        // 0, 15, 30, ... 360 inclusive for the default increment.
        let count = (360.0 / increment).floor() as usize;
        let sweep_offsets = (0..=count)
            .map(|i| (i as f64 * increment).to_radians())
            .collect();

        Ok(Self {
            no_fly_zones,
            central_area,
            sweep_offsets,
            max_steps: rules.max_steps,
        })
    }

    /// Fly from `start` to `destination`.
    ///
    /// Every waypoint but the last is exactly one step from its predecessor;
    /// the last one is `destination` itself.
    pub fn plan(&self, start: Position, destination: Position) -> Result<Vec<Position>, PlanError> {
        validate_position(&start)?;
        validate_position(&destination)?;

        let mut path = Vec::new();
        let mut current = start;
        let mut has_entered_central = false;

        while !is_close(current, destination) {
            if path.len() >= self.max_steps {
                tracing::warn!(steps = path.len(), "Planner step budget exhausted");
                return Err(PlanError::StepBudgetExhausted { steps: path.len() });
            }
            path.push(current);

            let inside_central = self.central_area.contains(current);
            if inside_central {
                has_entered_central = true;
            }
            if has_entered_central && !inside_central {
                return Err(PlanError::CentralAreaExitViolation { at: current });
            }

            current = self.next_step(current, destination)?;
        }

        path.push(destination);
        tracing::debug!(
            waypoints = path.len(),
            step = STEP,
            "Planned path from ({}, {})",
            start.lng,
            start.lat
        );
        Ok(path)
    }

    fn next_step(&self, current: Position, destination: Position) -> Result<Position, PlanError> {
        let bearing = bearing_towards(current, destination);
        let direct = move_by(current, bearing);
        if !self.in_no_fly_zone(direct) {
            return Ok(direct);
        }

        self.sweep_offsets
            .iter()
            .map(|offset| move_by(current, bearing + offset))
            .find(|candidate| !self.in_no_fly_zone(*candidate))
            .ok_or(PlanError::NoLegalPathFound { at: current })
    }

    fn in_no_fly_zone(&self, point: Position) -> bool {
        in_any_region(point, self.no_fly_zones)
    }
}

/// Location of the restaurant serving an order.
///
/// The prefix of the first pizza name picks the first restaurant with a menu
/// item under that prefix. `None` when the name has no prefix or nothing
/// matches.
pub fn restaurant_location(order: &Order, restaurants: &[Restaurant]) -> Option<Position> {
    let prefix = order.pizzas().first()?.restaurant_prefix()?;
    let tag = format!("{prefix}:");
    restaurants
        .iter()
        .find(|restaurant| restaurant.menu.iter().any(|p| p.name.starts_with(&tag)))
        .map(|restaurant| restaurant.location)
}
