//! Server configuration from environment.

use pizzadronz_core::DeliveryRules;
use pizzadronz_feed::DEFAULT_FEED_URL;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Base URL of the restaurant / airspace feed
    pub feed_url: String,
    pub feed_timeout_s: u64,
    /// Returned by `GET /uuid`
    pub service_id: String,
    /// Planner iteration cap per delivery
    pub max_plan_steps: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = DeliveryRules::default();
        Self {
            server_port: env::var("PIZZADRONZ_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            feed_url: env::var("PIZZADRONZ_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            feed_timeout_s: env::var("PIZZADRONZ_FEED_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            service_id: env::var("PIZZADRONZ_SERVICE_ID")
                .unwrap_or_else(|_| "s2190304".to_string()),
            max_plan_steps: env::var("PIZZADRONZ_MAX_PLAN_STEPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|steps| *steps > 0)
                .unwrap_or(defaults.max_steps),
        }
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_s)
    }

    pub fn delivery_rules(&self) -> DeliveryRules {
        DeliveryRules::default().with_max_steps(self.max_plan_steps)
    }
}
