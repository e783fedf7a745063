//! Order and feed snapshot files.

use anyhow::{Context, Result};
use pizzadronz_core::{Order, StaticProvider};
use serde_json::Value;
use std::path::Path;

/// Parse an order file body.
///
/// Accepts a single order, `null`, or an array of either. A `null` entry is
/// kept as `None` so it is reported as an empty order.
pub fn parse_orders(text: &str) -> Result<Vec<Option<Order>>> {
    let value: Value = serde_json::from_str(text).context("Order file is not valid JSON")?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => vec![other],
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            serde_json::from_value(entry).with_context(|| format!("Invalid order at index {idx}"))
        })
        .collect()
}

pub fn load_orders(path: &Path) -> Result<Vec<Option<Order>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    parse_orders(&text)
}

/// Load a feed snapshot: `{ "restaurants": [..], "noFlyZones": [..], "centralArea": {..} }`.
pub fn load_feed_file(path: &Path) -> Result<StaticProvider> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid feed snapshot in {}", path.display()))
}
