//! Fixed delivery constants and tunable planning rules.

use crate::models::Position;

/// Fixed charge added to every order, in pence.
pub const ORDER_CHARGE_IN_PENCE: i64 = 100;
/// Maximum number of pizzas in one order.
pub const MAX_PIZZAS_PER_ORDER: usize = 4;
/// Published delivery point (Appleton Tower).
pub const APPLETON_TOWER: Position = Position::new(-3.186874, 55.944494);

/// Configuration for order validation and path planning.
#[derive(Debug, Clone)]
pub struct DeliveryRules {
    /// Charge added to the pizza sum when checking the declared total
    pub order_charge_in_pence: i64,
    /// Pizzas allowed per order
    pub max_pizzas_per_order: usize,
    /// Where every delivery ends
    pub destination: Position,
    /// Card expiries further out than this many years are rejected
    pub expiry_horizon_years: u32,
    /// Angular increment of the no-fly-zone avoidance sweep, in degrees
    pub sweep_increment_deg: f64,
    /// Planner iteration cap
    pub max_steps: usize,
}

impl Default for DeliveryRules {
    fn default() -> Self {
        Self {
            order_charge_in_pence: ORDER_CHARGE_IN_PENCE,
            max_pizzas_per_order: MAX_PIZZAS_PER_ORDER,
            destination: APPLETON_TOWER,
            expiry_horizon_years: 5,
            sweep_increment_deg: 15.0,
            max_steps: 100_000,
        }
    }
}

impl DeliveryRules {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
