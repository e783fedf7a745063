//! Shared library surface for the PizzaDronz server and its tests.

pub mod api;
pub mod config;
pub mod state;
