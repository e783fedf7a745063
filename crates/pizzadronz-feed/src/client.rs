//! Feed API HTTP client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use pizzadronz_core::{FlightDataProvider, NamedRegion, ProviderError, Restaurant};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://ilp-rest-2024.azurewebsites.net";

const RESTAURANTS: &str = "/restaurants";
const NO_FLY_ZONES: &str = "/noFlyZones";
const CENTRAL_AREA: &str = "/centralArea";

/// HTTP client for the delivery data feed.
///
/// No caching and no retries: each call is a fresh GET.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| ProviderError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed request {} failed with {}", url, status);
            return Err(ProviderError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|err| ProviderError::Transport {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|err| ProviderError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl FlightDataProvider for FeedClient {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        self.get_json(RESTAURANTS).await
    }

    async fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, ProviderError> {
        self.get_json(NO_FLY_ZONES).await
    }

    async fn central_area(&self) -> Result<NamedRegion, ProviderError> {
        self.get_json(CENTRAL_AREA).await
    }
}
