//! Printable delivery results.

use pizzadronz_core::{
    DeliveryOutcome, DeliveryService, FlightDataProvider, LineString, Order, Position,
    ValidatedOrder,
};
use serde::Serialize;

/// One line of `plan_delivery` output.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DeliveryReport {
    Rejected(ValidatedOrder),
    Path(Vec<Position>),
    GeoJson(LineString),
    Failed(OrderFailure),
}

impl DeliveryReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// A feed or planning error that stopped one order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFailure {
    pub order_no: Option<String>,
    pub error: String,
}

/// Plan every order independently.
///
/// A failure is recorded against its own order and the batch carries on.
pub async fn plan_orders<P: FlightDataProvider>(
    service: &DeliveryService<P>,
    orders: Vec<Option<Order>>,
    geojson: bool,
) -> Vec<DeliveryReport> {
    let mut reports = Vec::with_capacity(orders.len());
    for order in orders {
        let order_no = order.as_ref().and_then(|o| o.order_no.clone());
        match service.calc_delivery_path(order).await {
            Ok(outcome) => reports.push(render(outcome, geojson)),
            Err(e) => {
                tracing::error!("Order {:?} failed: {}", order_no, e);
                reports.push(DeliveryReport::Failed(OrderFailure {
                    order_no,
                    error: e.to_string(),
                }));
            }
        }
    }
    reports
}

/// Turn a delivery outcome into its report, as a GeoJSON `LineString` if asked.
pub fn render(outcome: DeliveryOutcome, geojson: bool) -> DeliveryReport {
    match outcome {
        DeliveryOutcome::Rejected(validated) => DeliveryReport::Rejected(validated),
        DeliveryOutcome::Planned(path) if geojson => {
            DeliveryReport::GeoJson(LineString::from_path(&path))
        }
        DeliveryOutcome::Planned(path) => DeliveryReport::Path(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pizzadronz_core::{
        CreditCardInformation, DeliveryRules, NamedRegion, OrderValidationCode, Pizza,
        Restaurant, StaticProvider,
    };
    use serde_json::json;

    fn path() -> Vec<Position> {
        vec![Position::new(-3.19, 55.945), Position::new(-3.18985, 55.945)]
    }

    #[test]
    fn planned_path_as_positions() {
        let report = render(DeliveryOutcome::Planned(path()), false);
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!([{ "lng": -3.19, "lat": 55.945 }, { "lng": -3.18985, "lat": 55.945 }])
        );
    }

    #[test]
    fn planned_path_as_geojson() {
        let report = render(DeliveryOutcome::Planned(path()), true);
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["type"], "LineString");
        assert_eq!(value["coordinates"][1], json!([-3.18985, 55.945]));
    }

    #[test]
    fn rejected_order_ignores_geojson_flag() {
        let validated = ValidatedOrder::new(None, OrderValidationCode::EmptyOrder);
        let report = render(DeliveryOutcome::Rejected(validated), true);
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["orderValidationCode"], "EMPTY_ORDER");
    }

    fn paid_order(order_no: &str, pizza: Pizza) -> Option<Order> {
        let total = pizza.price_in_pence + 100;
        let mut order = Order::new(vec![pizza], total)
            .with_card(CreditCardInformation::new("4485959141852684", "10/26", "816"));
        order.order_no = Some(order_no.to_string());
        Some(order)
    }

    /// Civerinos sits inside a central area that Appleton Tower is outside
    /// of, so its deliveries must leave the area. Domino's never enters it.
    fn exit_trap_service() -> DeliveryService<StaticProvider> {
        let feed = StaticProvider {
            restaurants: vec![
                Restaurant {
                    name: "Civerinos Slice".into(),
                    location: Position::new(-3.1912869215011597, 55.945535152517735),
                    opening_days: vec![],
                    menu: vec![Pizza::new("R1: Margarita", 1000)],
                },
                Restaurant {
                    name: "Domino's".into(),
                    location: Position::new(-3.1838572025299072, 55.94449876875712),
                    opening_days: vec![],
                    menu: vec![Pizza::new("R5: Pizza Dream", 1400)],
                },
            ],
            no_fly_zones: vec![],
            central_area: NamedRegion::new(
                "west",
                vec![
                    Position::new(-3.1925, 55.9462),
                    Position::new(-3.1925, 55.9426),
                    Position::new(-3.1895, 55.9426),
                    Position::new(-3.1895, 55.9462),
                ],
            ),
        };
        DeliveryService::new(feed, DeliveryRules::default())
            .with_fixed_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    }

    #[tokio::test]
    async fn failed_order_does_not_stop_the_batch() {
        let orders = vec![
            paid_order("A", Pizza::new("R1: Margarita", 1000)),
            paid_order("B", Pizza::new("R5: Pizza Dream", 1400)),
        ];

        let reports = plan_orders(&exit_trap_service(), orders, true).await;
        assert_eq!(reports.len(), 2);

        assert!(reports[0].is_failure());
        let failure = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(failure["orderNo"], "A");
        assert!(failure["error"].as_str().unwrap().contains("central area"));

        assert!(!reports[1].is_failure());
        let line = serde_json::to_value(&reports[1]).unwrap();
        assert_eq!(line["type"], "LineString");
        let coordinates = line["coordinates"].as_array().unwrap();
        assert_eq!(coordinates.last().unwrap(), &json!([-3.186874, 55.944494]));
    }

    #[tokio::test]
    async fn invalid_orders_in_a_batch_are_not_failures() {
        let reports = plan_orders(&exit_trap_service(), vec![None], false).await;
        assert!(!reports[0].is_failure());
        let value = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(value["orderValidationCode"], "EMPTY_ORDER");
    }
}
