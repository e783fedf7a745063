//! PizzaDronz Server - order validation and drone delivery planning

use anyhow::Result;
use axum::routing::get;
use pizzadronz_feed::FeedClient;
use pizzadronz_server::{api, config::Config, state::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pizzadronz_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting PizzaDronz Server...");

    let config = Config::from_env();
    let port = config.server_port;
    let feed = FeedClient::new(config.feed_url.clone(), config.feed_timeout())?;
    tracing::info!("Using data feed at {}", feed.base_url());
    let state = Arc::new(AppState::new(config, Arc::new(feed)));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
