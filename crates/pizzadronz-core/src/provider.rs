//! Source of restaurant and airspace data.

use crate::models::{NamedRegion, Restaurant};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to fetch {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("Failed to parse {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

/// Read-only access to the delivery data feed.
///
/// Implementations are stateless; every call reflects the feed at that moment.
#[async_trait]
pub trait FlightDataProvider: Send + Sync {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError>;
    async fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, ProviderError>;
    async fn central_area(&self) -> Result<NamedRegion, ProviderError>;
}

#[async_trait]
impl<P: FlightDataProvider + ?Sized> FlightDataProvider for Arc<P> {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        (**self).restaurants().await
    }

    async fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, ProviderError> {
        (**self).no_fly_zones().await
    }

    async fn central_area(&self) -> Result<NamedRegion, ProviderError> {
        (**self).central_area().await
    }
}

/// A fixed snapshot of feed data, loaded from a file or built in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticProvider {
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub no_fly_zones: Vec<NamedRegion>,
    pub central_area: NamedRegion,
}

#[async_trait]
impl FlightDataProvider for StaticProvider {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        Ok(self.restaurants.clone())
    }

    async fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, ProviderError> {
        Ok(self.no_fly_zones.clone())
    }

    async fn central_area(&self) -> Result<NamedRegion, ProviderError> {
        Ok(self.central_area.clone())
    }
}
