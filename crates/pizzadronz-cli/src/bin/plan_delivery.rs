//! CLI tool to validate orders and plan their delivery flights.
//!
//! Reads orders from a JSON file and prints one JSON document per order:
//! the flight path for valid orders, the validated order otherwise, and an
//! `{"orderNo", "error"}` record when the feed or the planner fails. Exits
//! non-zero if any order failed.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use pizzadronz_cli::{load_feed_file, load_orders, plan_orders};
use pizzadronz_core::{DeliveryRules, DeliveryService, FlightDataProvider};
use pizzadronz_feed::{FeedClient, DEFAULT_FEED_URL};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Validate orders and plan drone delivery paths
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Order file: one order, or an array of orders
    orders: PathBuf,

    /// Data feed URL
    #[arg(long, env = "PIZZADRONZ_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Offline feed snapshot to use instead of the live feed
    #[arg(long)]
    feed_file: Option<PathBuf>,

    /// Feed request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Print paths as GeoJSON LineStrings
    #[arg(long)]
    geojson: bool,

    /// Step budget for a single flight
    #[arg(long, env = "PIZZADRONZ_MAX_PLAN_STEPS", default_value_t = 100_000)]
    max_steps: usize,

    /// Date for card expiry checks (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pizzadronz_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let orders = load_orders(&args.orders)?;

    let provider: Arc<dyn FlightDataProvider> = match &args.feed_file {
        Some(path) => {
            tracing::info!("Using feed snapshot {}", path.display());
            Arc::new(load_feed_file(path)?)
        }
        None => {
            let feed = FeedClient::new(args.feed_url.clone(), Duration::from_secs(args.timeout))?;
            tracing::info!("Using data feed at {}", feed.base_url());
            Arc::new(feed)
        }
    };

    let rules = DeliveryRules::default().with_max_steps(args.max_steps);
    let mut service = DeliveryService::new(provider, rules);
    if let Some(date) = args.date {
        service = service.with_fixed_date(date);
    }

    let total = orders.len();
    tracing::info!("Planning {} order(s)", total);
    let reports = plan_orders(&service, orders, args.geojson).await;
    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    let failed = reports.iter().filter(|r| r.is_failure()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} order(s) failed", failed, total);
    }

    Ok(())
}
