use chrono::{DateTime, Utc};

use super::wire;

/// A single news item returned by the news endpoint.
///
/// Immutable; discarded after rendering. Only the identifier outlives the
/// cycle, moving into the seen-article ledger.
#[derive(Debug, Clone)]
pub struct Article {
    /// Opaque identifier, unique per source item.
    pub id: String,
    pub title: String,
    /// Canonical URL the embed title links to.
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source_name: String,
    pub source_domain: String,
}

impl From<wire::PostItem> for Article {
    fn from(item: wire::PostItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title,
            url: item.url,
            published_at: item.published_at,
            source_name: item.source.title,
            source_domain: item.source.domain,
        }
    }
}

/// Market data for one currency, produced fresh on every fetch and never
/// cached beyond the current update cycle.
#[derive(Debug, Clone)]
pub struct Quote {
    pub symbol: String,
    pub price_usd: f64,
    /// Signed 24h percent change.
    pub percent_change_24h: f64,
    pub market_cap_usd: f64,
}

impl From<wire::TickerItem> for Quote {
    fn from(item: wire::TickerItem) -> Self {
        Self {
            symbol: item.symbol,
            price_usd: item.price_usd,
            percent_change_24h: item.percent_change_24h,
            market_cap_usd: item.market_cap_usd,
        }
    }
}
