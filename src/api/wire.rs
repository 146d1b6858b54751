//! Raw response shapes for the news/price API.
//!
//! Both endpoints wrap their payload in an object with a `results` array.
//! These structs mirror the upstream JSON exactly; conversion into the domain
//! models lives in [`super::model`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PostsEnvelope {
    #[serde(default)]
    pub results: Vec<PostItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostItem {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: PostSource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostSource {
    pub title: String,
    pub domain: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TickerEnvelope {
    #[serde(default)]
    pub results: Vec<TickerItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TickerItem {
    pub symbol: String,
    pub price_usd: f64,
    pub percent_change_24h: f64,
    pub market_cap_usd: f64,
}
