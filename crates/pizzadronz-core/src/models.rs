//! Core data models for orders, restaurants and airspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the flat (longitude, latitude) plane, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A named polygon. The first vertex implicitly connects to the last.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRegion {
    #[serde(default)]
    pub name: String,
    pub vertices: Vec<Position>,
}

impl NamedRegion {
    pub fn new(name: impl Into<String>, vertices: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Check if a point is inside this region's polygon.
    pub fn contains(&self, point: Position) -> bool {
        crate::spatial::point_in_polygon(point, &self.vertices)
    }
}

/// A menu item, either on a restaurant menu or in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    /// `"<RestaurantPrefix>: <ItemName>"`
    pub name: String,
    pub price_in_pence: i64,
}

impl Pizza {
    pub fn new(name: impl Into<String>, price_in_pence: i64) -> Self {
        Self {
            name: name.into(),
            price_in_pence,
        }
    }

    /// Restaurant prefix of the item name (text before the first `:`).
    pub fn restaurant_prefix(&self) -> Option<&str> {
        self.name
            .split_once(':')
            .map(|(prefix, _)| prefix.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInformation {
    #[serde(default)]
    pub credit_card_number: Option<String>,
    /// `MM/YY`
    #[serde(default)]
    pub credit_card_expiry: Option<String>,
    #[serde(default)]
    pub cvv: Option<String>,
}

impl CreditCardInformation {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            credit_card_number: Some(number.into()),
            credit_card_expiry: Some(expiry.into()),
            cvv: Some(cvv.into()),
        }
    }
}

/// An order as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    #[serde(default)]
    pub price_total_in_pence: i64,
    #[serde(default)]
    pub pizzas_in_order: Option<Vec<Pizza>>,
    #[serde(default)]
    pub credit_card_information: Option<CreditCardInformation>,
}

impl Order {
    pub fn new(pizzas: Vec<Pizza>, price_total_in_pence: i64) -> Self {
        Self {
            pizzas_in_order: Some(pizzas),
            price_total_in_pence,
            ..Self::default()
        }
    }

    pub fn with_card(mut self, card: CreditCardInformation) -> Self {
        self.credit_card_information = Some(card);
        self
    }

    /// Pizzas in the order; a missing list reads as empty.
    pub fn pizzas(&self) -> &[Pizza] {
        self.pizzas_in_order.as_deref().unwrap_or_default()
    }
}

/// A restaurant from the data feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: Position,
    #[serde(default)]
    pub opening_days: Vec<String>,
    #[serde(default)]
    pub menu: Vec<Pizza>,
}

/// Outcome of order validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderValidationCode {
    #[default]
    Undefined,
    NoError,
    EmptyOrder,
    MaxPizzaCountExceeded,
    TotalIncorrect,
    CardNumberInvalid,
    ExpiryDateInvalid,
    CvvInvalid,
    PizzaNotDefined,
    PizzaFromMultipleRestaurants,
}

impl OrderValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::NoError => "NO_ERROR",
            Self::EmptyOrder => "EMPTY_ORDER",
            Self::MaxPizzaCountExceeded => "MAX_PIZZA_COUNT_EXCEEDED",
            Self::TotalIncorrect => "TOTAL_INCORRECT",
            Self::CardNumberInvalid => "CARD_NUMBER_INVALID",
            Self::ExpiryDateInvalid => "EXPIRY_DATE_INVALID",
            Self::CvvInvalid => "CVV_INVALID",
            Self::PizzaNotDefined => "PIZZA_NOT_DEFINED",
            Self::PizzaFromMultipleRestaurants => "PIZZA_FROM_MULTIPLE_RESTAURANTS",
        }
    }
}

impl fmt::Display for OrderValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The submitted order paired with its validation outcome.
///
/// Serializes as the order itself with `orderValidationCode` attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub order_validation_code: OrderValidationCode,
}

impl ValidatedOrder {
    /// A missing order is reported as an empty one.
    pub fn new(order: Option<Order>, code: OrderValidationCode) -> Self {
        Self {
            order: order.unwrap_or_default(),
            order_validation_code: code,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.order_validation_code == OrderValidationCode::NoError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_reads_wire_format() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "orderNo": "19514FE0",
            "orderDate": "2025-01-01",
            "orderStatus": "UNDEFINED",
            "orderValidationCode": "UNDEFINED",
            "priceTotalInPence": 1100,
            "pizzasInOrder": [{ "name": "R1: Margarita", "priceInPence": 1000 }],
            "creditCardInformation": {
                "creditCardNumber": "4485959141852684",
                "creditCardExpiry": "10/26",
                "cvv": "816"
            }
        }))
        .unwrap();

        assert_eq!(order.price_total_in_pence, 1100);
        assert_eq!(order.pizzas().len(), 1);
        assert_eq!(order.pizzas()[0].restaurant_prefix(), Some("R1"));
        let card = order.credit_card_information.unwrap();
        assert_eq!(card.cvv.as_deref(), Some("816"));
    }

    #[test]
    fn validated_order_attaches_code() {
        let order = Order::new(vec![Pizza::new("R1: Margarita", 1000)], 1100);
        let value =
            serde_json::to_value(ValidatedOrder::new(Some(order), OrderValidationCode::CvvInvalid))
                .unwrap();
        assert_eq!(value["orderValidationCode"], "CVV_INVALID");
        assert_eq!(value["priceTotalInPence"], 1100);
    }

    #[test]
    fn missing_order_reports_empty_order() {
        let validated = ValidatedOrder::new(None, OrderValidationCode::EmptyOrder);
        assert!(validated.order.pizzas().is_empty());
        assert!(!validated.is_valid());
    }

    #[test]
    fn prefix_requires_colon() {
        assert_eq!(Pizza::new("Margarita", 1000).restaurant_prefix(), None);
        assert_eq!(
            Pizza::new("Civerinos:  Margarita", 1000).restaurant_prefix(),
            Some("Civerinos")
        );
    }
}
