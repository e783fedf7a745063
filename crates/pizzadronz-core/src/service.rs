//! Order validation and path planning over a live data provider.

use crate::models::{Order, OrderValidationCode, Position, Restaurant, ValidatedOrder};
use crate::planner::{restaurant_location, PathPlanner, PlanError};
use crate::provider::{FlightDataProvider, ProviderError};
use crate::rules::DeliveryRules;
use crate::validation::{MenuIndex, OrderValidator, RuleOutcome};
use chrono::{NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Result of asking for a delivery path.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// The order failed validation; no path was planned.
    Rejected(ValidatedOrder),
    Planned(Vec<Position>),
}

/// Validates orders and plans their delivery flights.
///
/// Feed data is fetched fresh on every call and never cached.
pub struct DeliveryService<P> {
    provider: P,
    validator: OrderValidator,
    rules: DeliveryRules,
    fixed_date: Option<NaiveDate>,
}

impl<P: FlightDataProvider> DeliveryService<P> {
    pub fn new(provider: P, rules: DeliveryRules) -> Self {
        Self {
            provider,
            validator: OrderValidator::new(rules.clone()),
            rules,
            fixed_date: None,
        }
    }

    /// Pin the date used for card expiry checks.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Validate an order. Unknown pizzas are reported as `PIZZA_NOT_DEFINED`.
    pub async fn validate_order(
        &self,
        order: Option<Order>,
    ) -> Result<ValidatedOrder, ProviderError> {
        let (outcome, _) = self.evaluate(order.as_ref()).await?;
        if let RuleOutcome::UnknownPizza(name) = &outcome {
            tracing::info!("Order references unknown pizza '{}'", name);
        }
        Ok(ValidatedOrder::new(order, outcome.resolve()))
    }

    /// Validate an order and, when valid, plan its flight from the restaurant
    /// to the delivery point.
    pub async fn calc_delivery_path(
        &self,
        order: Option<Order>,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        let (outcome, restaurants) = self.evaluate(order.as_ref()).await?;
        let code = outcome.resolve();
        let order = match order {
            Some(order) if code == OrderValidationCode::NoError => order,
            other => return Ok(DeliveryOutcome::Rejected(ValidatedOrder::new(other, code))),
        };

        let Some(start) = restaurant_location(&order, &restaurants) else {
            tracing::info!("No restaurant location for order {:?}", order.order_no);
            return Ok(DeliveryOutcome::Rejected(ValidatedOrder::new(
                Some(order),
                OrderValidationCode::PizzaNotDefined,
            )));
        };

        let no_fly_zones = self.provider.no_fly_zones().await?;
        let central_area = self.provider.central_area().await?;
        tracing::debug!(
            zones = no_fly_zones.len(),
            central_vertices = central_area.vertices.len(),
            "Fetched airspace"
        );

        let planner = PathPlanner::new(&no_fly_zones, &central_area, &self.rules)?;
        let path = planner.plan(start, self.rules.destination)?;
        Ok(DeliveryOutcome::Planned(path))
    }

    /// Run the pipeline, fetching restaurants only once the order details
    /// pass. Returns the fetched restaurants for reuse.
    async fn evaluate(
        &self,
        order: Option<&Order>,
    ) -> Result<(RuleOutcome, Vec<Restaurant>), ProviderError> {
        let today = self.today();
        let code = self.validator.check_details(order, today);
        let Some(order) = order.filter(|_| code == OrderValidationCode::NoError) else {
            return Ok((RuleOutcome::Code(code), Vec::new()));
        };

        let restaurants = self.provider.restaurants().await?;
        let menu = MenuIndex::from_restaurants(&restaurants);
        tracing::debug!(
            restaurants = restaurants.len(),
            menu_items = menu.len(),
            "Fetched restaurants"
        );
        Ok((self.validator.check_restaurants(order, &menu), restaurants))
    }
}
