//! PizzaDronz feed - client for the remote restaurant and airspace service.

pub mod client;

pub use client::{FeedClient, DEFAULT_FEED_URL};
