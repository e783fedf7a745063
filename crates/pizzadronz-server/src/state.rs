//! Per-process application state.
//!
//! Holds configuration and the delivery service; no request data is kept
//! between calls.

use crate::config::Config;
use pizzadronz_core::{DeliveryService, FlightDataProvider};
use std::sync::Arc;

pub type SharedProvider = Arc<dyn FlightDataProvider>;

pub struct AppState {
    config: Config,
    delivery: DeliveryService<SharedProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: SharedProvider) -> Self {
        let delivery = DeliveryService::new(provider, config.delivery_rules());
        Self::with_service(config, delivery)
    }

    pub fn with_service(config: Config, delivery: DeliveryService<SharedProvider>) -> Self {
        Self { config, delivery }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn delivery(&self) -> &DeliveryService<SharedProvider> {
        &self.delivery
    }
}
