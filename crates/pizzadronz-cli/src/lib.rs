//! PizzaDronz CLI - command line tools for order validation and delivery planning.
//!
//! This crate provides the binaries:
//! - plan_delivery: validate orders from a file and print their flight paths

pub mod input;
pub mod report;

pub use input::{load_feed_file, load_orders, parse_orders};
pub use report::{plan_orders, render, DeliveryReport, OrderFailure};
