//! Order validation pipeline.
//!
//! Rules run in a fixed order and the first failing rule decides the
//! outcome; later rules are never evaluated.

use crate::models::{Order, OrderValidationCode, Restaurant};
use crate::rules::DeliveryRules;
use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static CARD_NUMBER: OnceLock<Regex> = OnceLock::new();
static EXPIRY: OnceLock<Regex> = OnceLock::new();
static CVV: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("static pattern compiles"))
}

/// Pizza name -> owning restaurant name, built once per validation from the
/// full restaurant feed.
#[derive(Debug, Clone, Default)]
pub struct MenuIndex {
    owners: HashMap<String, String>,
}

impl MenuIndex {
    pub fn from_restaurants(restaurants: &[Restaurant]) -> Self {
        let mut owners = HashMap::new();
        for restaurant in restaurants {
            for pizza in &restaurant.menu {
                owners
                    .entry(pizza.name.clone())
                    .or_insert_with(|| restaurant.name.clone());
            }
        }
        Self { owners }
    }

    pub fn restaurant_for(&self, pizza_name: &str) -> Option<&str> {
        self.owners.get(pizza_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Result of running the pipeline.
///
/// A pizza missing from the feed is kept apart from the business codes so
/// the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Code(OrderValidationCode),
    UnknownPizza(String),
}

impl RuleOutcome {
    /// Collapse into the code reported to clients.
    pub fn resolve(self) -> OrderValidationCode {
        match self {
            Self::Code(code) => code,
            Self::UnknownPizza(_) => OrderValidationCode::PizzaNotDefined,
        }
    }
}

/// Staged rule checks over an order.
#[derive(Debug, Clone, Default)]
pub struct OrderValidator {
    rules: DeliveryRules,
}

impl OrderValidator {
    pub fn new(rules: DeliveryRules) -> Self {
        Self { rules }
    }

    /// Validate against today's date.
    pub fn validate(&self, order: Option<&Order>, menu: &MenuIndex) -> RuleOutcome {
        self.validate_at(order, menu, Utc::now().date_naive())
    }

    /// Validate with an explicit current date.
    pub fn validate_at(
        &self,
        order: Option<&Order>,
        menu: &MenuIndex,
        today: NaiveDate,
    ) -> RuleOutcome {
        match (self.check_details(order, today), order) {
            (OrderValidationCode::NoError, Some(order)) => self.check_restaurants(order, menu),
            (code, _) => RuleOutcome::Code(code),
        }
    }

    /// Every rule that needs no restaurant data, in pipeline order.
    ///
    /// Returns `NoError` when all of them pass.
    pub fn check_details(&self, order: Option<&Order>, today: NaiveDate) -> OrderValidationCode {
        let Some(order) = order else {
            return OrderValidationCode::EmptyOrder;
        };
        let pizzas = order.pizzas();
        if pizzas.is_empty() {
            return OrderValidationCode::EmptyOrder;
        }

        if pizzas.len() > self.rules.max_pizzas_per_order {
            return OrderValidationCode::MaxPizzaCountExceeded;
        }

        let pizza_total = pizzas
            .iter()
            .fold(0_i64, |sum, pizza| sum.saturating_add(pizza.price_in_pence));
        let expected_total = pizza_total.saturating_add(self.rules.order_charge_in_pence);
        if expected_total != order.price_total_in_pence {
            return OrderValidationCode::TotalIncorrect;
        }

        let card = order.credit_card_information.as_ref();

        let number = card.and_then(|c| c.credit_card_number.as_deref());
        if !number.is_some_and(|n| pattern(&CARD_NUMBER, r"^[0-9]{16}$").is_match(n)) {
            return OrderValidationCode::CardNumberInvalid;
        }

        let expiry = card.and_then(|c| c.credit_card_expiry.as_deref());
        if !expiry.is_some_and(|e| is_valid_expiry(e, today, self.rules.expiry_horizon_years)) {
            return OrderValidationCode::ExpiryDateInvalid;
        }

        let cvv = card.and_then(|c| c.cvv.as_deref());
        if !cvv.is_some_and(|v| pattern(&CVV, r"^[0-9]{3}$").is_match(v)) {
            return OrderValidationCode::CvvInvalid;
        }

        OrderValidationCode::NoError
    }

    /// All pizzas must be known and come from a single restaurant.
    pub fn check_restaurants(&self, order: &Order, menu: &MenuIndex) -> RuleOutcome {
        let mut restaurants = HashSet::new();
        for pizza in order.pizzas() {
            match menu.restaurant_for(&pizza.name) {
                Some(restaurant) => {
                    restaurants.insert(restaurant);
                }
                None => return RuleOutcome::UnknownPizza(pizza.name.clone()),
            }
        }

        if restaurants.len() == 1 {
            RuleOutcome::Code(OrderValidationCode::NoError)
        } else {
            RuleOutcome::Code(OrderValidationCode::PizzaFromMultipleRestaurants)
        }
    }
}

/// `MM/YY`, month 1-12, not before this month and at most `horizon_years` ahead.
fn is_valid_expiry(expiry: &str, today: NaiveDate, horizon_years: u32) -> bool {
    if !pattern(&EXPIRY, r"^[0-9]{2}/[0-9]{2}$").is_match(expiry) {
        return false;
    }
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let (Ok(month), Ok(year)) = (month.parse::<i64>(), year.parse::<i64>()) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let expiry_month = (2000 + year) * 12 + (month - 1);
    let current_month = i64::from(today.year()) * 12 + i64::from(today.month0());
    let latest_month = current_month + i64::from(horizon_years) * 12;

    (current_month..=latest_month).contains(&expiry_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreditCardInformation, Pizza, Position};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn menu() -> MenuIndex {
        MenuIndex::from_restaurants(&[
            Restaurant {
                name: "Rest1".into(),
                location: Position::new(-3.1912869215011597, 55.945535152517735),
                opening_days: vec![],
                menu: vec![
                    Pizza::new("R1: Margarita", 1000),
                    Pizza::new("R1: Pepperoni", 1200),
                ],
            },
            Restaurant {
                name: "Rest4".into(),
                location: Position::new(-3.19, 55.944),
                opening_days: vec![],
                menu: vec![
                    Pizza::new("R4: Proper Pizza", 1400),
                    Pizza::new("R4: Pineapple & Ham & Cheese", 900),
                ],
            },
        ])
    }

    fn valid_card() -> CreditCardInformation {
        CreditCardInformation::new("4485959141852684", "10/26", "816")
    }

    fn order_of(pizzas: Vec<Pizza>) -> Order {
        let total = pizzas.iter().map(|p| p.price_in_pence).sum::<i64>() + 100;
        Order::new(pizzas, total).with_card(valid_card())
    }

    fn validate(order: &Order) -> OrderValidationCode {
        OrderValidator::default()
            .validate_at(Some(order), &menu(), today())
            .resolve()
    }

    #[test]
    fn valid_order_passes() {
        let order = order_of(vec![Pizza::new("R1: Margarita", 1000)]);
        assert_eq!(order.price_total_in_pence, 1100);
        assert_eq!(validate(&order), OrderValidationCode::NoError);
    }

    #[test]
    fn missing_or_empty_order_is_empty() {
        let validator = OrderValidator::default();
        assert_eq!(
            validator.validate_at(None, &menu(), today()),
            RuleOutcome::Code(OrderValidationCode::EmptyOrder)
        );
        assert_eq!(
            validate(&Order::new(vec![], 100).with_card(valid_card())),
            OrderValidationCode::EmptyOrder
        );
        assert_eq!(validate(&Order::default()), OrderValidationCode::EmptyOrder);
    }

    #[test]
    fn pizza_count_beats_total_mismatch() {
        let pizzas = vec![Pizza::new("R1: Margarita", 1000); 5];
        let order = Order::new(pizzas, 1).with_card(valid_card());
        assert_eq!(validate(&order), OrderValidationCode::MaxPizzaCountExceeded);
    }

    #[test]
    fn total_must_include_order_charge() {
        let order =
            Order::new(vec![Pizza::new("R1: Margarita", 1000)], 1000).with_card(valid_card());
        assert_eq!(validate(&order), OrderValidationCode::TotalIncorrect);
    }

    #[test]
    fn card_number_must_be_sixteen_digits() {
        let mut order = order_of(vec![Pizza::new("R1: Margarita", 1000)]);
        for number in ["123", "448595914185268x", "44859591418526841"] {
            order.credit_card_information =
                Some(CreditCardInformation::new(number, "10/26", "816"));
            assert_eq!(validate(&order), OrderValidationCode::CardNumberInvalid);
        }

        order.credit_card_information = None;
        assert_eq!(validate(&order), OrderValidationCode::CardNumberInvalid);
    }

    #[test]
    fn card_number_checked_before_expiry_and_cvv() {
        let mut order = order_of(vec![Pizza::new("R1: Margarita", 1000)]);
        order.credit_card_information = Some(CreditCardInformation::new("123", "13/99", "1"));
        assert_eq!(validate(&order), OrderValidationCode::CardNumberInvalid);
    }

    #[test]
    fn expiry_rules() {
        let mut order = order_of(vec![Pizza::new("R1: Margarita", 1000)]);
        for expiry in ["02/26", "13/27", "00/27", "1/27", "04/2027", "04-27", "04/32"] {
            order.credit_card_information =
                Some(CreditCardInformation::new("4485959141852684", expiry, "816"));
            assert_eq!(
                validate(&order),
                OrderValidationCode::ExpiryDateInvalid,
                "expiry {expiry}"
            );
        }

        for expiry in ["03/26", "12/29", "03/31"] {
            order.credit_card_information =
                Some(CreditCardInformation::new("4485959141852684", expiry, "816"));
            assert_eq!(validate(&order), OrderValidationCode::NoError, "expiry {expiry}");
        }

        order.credit_card_information = Some(CreditCardInformation {
            credit_card_expiry: None,
            ..CreditCardInformation::new("4485959141852684", "", "816")
        });
        assert_eq!(validate(&order), OrderValidationCode::ExpiryDateInvalid);
    }

    #[test]
    fn cvv_must_be_three_digits() {
        let mut order = order_of(vec![Pizza::new("R1: Margarita", 1000)]);
        for cvv in ["81", "8160", "81a"] {
            order.credit_card_information =
                Some(CreditCardInformation::new("4485959141852684", "10/26", cvv));
            assert_eq!(validate(&order), OrderValidationCode::CvvInvalid);
        }
    }

    #[test]
    fn pizzas_from_two_restaurants_rejected() {
        let order = order_of(vec![
            Pizza::new("R1: Margarita", 1000),
            Pizza::new("R4: Proper Pizza", 1400),
        ]);
        assert_eq!(
            validate(&order),
            OrderValidationCode::PizzaFromMultipleRestaurants
        );
    }

    #[test]
    fn unknown_pizza_is_a_distinct_outcome() {
        let order = order_of(vec![Pizza::new("R9: Calzone", 1000)]);
        let outcome = OrderValidator::default().validate_at(Some(&order), &menu(), today());
        assert_eq!(outcome, RuleOutcome::UnknownPizza("R9: Calzone".into()));
        assert_eq!(outcome.resolve(), OrderValidationCode::PizzaNotDefined);
    }

    #[test]
    fn failing_details_skip_the_menu() {
        let card = CreditCardInformation::new("4485959141852684", "10/26", "8");
        let order = Order::new(vec![Pizza::new("R9: Calzone", 1000)], 1100).with_card(card);
        assert_eq!(validate(&order), OrderValidationCode::CvvInvalid);
    }

    #[test]
    fn menu_index_maps_every_item() {
        let index = menu();
        assert_eq!(index.len(), 4);
        assert_eq!(index.restaurant_for("R4: Proper Pizza"), Some("Rest4"));
        assert_eq!(index.restaurant_for("R4: Calzone"), None);
    }
}
