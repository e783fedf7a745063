//! PizzaDronz core - order validation and delivery path planning.
//!
//! Everything here is synchronous and stateless except the
//! [`DeliveryService`], which pulls restaurant and airspace data from an
//! injected [`FlightDataProvider`] once per request.

pub mod coordinates;
pub mod geojson;
pub mod models;
pub mod planner;
pub mod provider;
pub mod rules;
pub mod service;
pub mod spatial;
pub mod validation;

pub use coordinates::{validate_position, validate_region, CoordinateError};
pub use geojson::LineString;
pub use models::{
    CreditCardInformation, NamedRegion, Order, OrderValidationCode, Pizza, Position, Restaurant,
    ValidatedOrder,
};
pub use planner::{restaurant_location, PathPlanner, PlanError};
pub use provider::{FlightDataProvider, ProviderError, StaticProvider};
pub use rules::DeliveryRules;
pub use service::{DeliveryError, DeliveryOutcome, DeliveryService};
pub use validation::{MenuIndex, OrderValidator, RuleOutcome};
