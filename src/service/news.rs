//! News fetching, duplicate suppression, and publishing.
//!
//! One news cycle fetches the listing from the API, filters it through the
//! seen-article ledger, and posts an embed per accepted article to the
//! configured channel. A failed fetch yields an empty cycle; an unresolvable
//! channel aborts the whole cycle for that tick.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp},
    http::Http,
};
use tokio::sync::Mutex;

use crate::{
    api::{ApiClient, Article},
    config::Config,
    error::AppError,
    ledger::SeenLedger,
};

/// Blue, used for news embeds.
const NEWS_EMBED_COLOR: u32 = 0x3498db;

/// Filters articles through the ledger, accepting at most `max` unseen items.
///
/// Articles are visited in upstream order. Already-seen identifiers are
/// skipped without touching the ledger; accepted identifiers are inserted.
/// Iteration stops as soon as `max` articles are accepted, so unseen items
/// past the cap are neither yielded nor recorded, deferring them to the next
/// cycle.
pub fn select_unseen(
    articles: Vec<Article>,
    ledger: &mut SeenLedger,
    max: usize,
) -> Vec<Article> {
    let mut fresh = Vec::new();

    for article in articles {
        if fresh.len() == max {
            break;
        }
        if ledger.contains(&article.id) {
            continue;
        }
        ledger.insert(&article.id);
        fresh.push(article);
    }

    fresh
}

/// Builds the display card for one article.
///
/// Title links to the canonical URL, the description names the source, the
/// embed timestamp carries the publication time, and the footer names the
/// source domain.
pub fn article_embed(article: &Article) -> Result<CreateEmbed, AppError> {
    let timestamp =
        Timestamp::from_unix_timestamp(article.published_at.timestamp()).map_err(|e| {
            AppError::InternalError(format!(
                "Invalid publication timestamp {}: {}",
                article.published_at, e
            ))
        })?;

    Ok(CreateEmbed::new()
        .title(&article.title)
        .url(&article.url)
        .description(format!("Published by {}", article.source_name))
        .color(NEWS_EMBED_COLOR)
        .footer(CreateEmbedFooter::new(&article.source_domain))
        .timestamp(timestamp))
}

/// Runs one fetch-and-publish cycle.
///
/// Every failure is handled locally: a fetch error ends the cycle with
/// nothing posted, a channel that cannot be resolved aborts the cycle after
/// logging, and a failed send for one article does not stop the rest.
pub async fn run_news_cycle(
    http: &Http,
    api: &ApiClient,
    config: &Config,
    ledger: &Mutex<SeenLedger>,
) {
    let articles = match api
        .news_posts(&config.currency, config.news_important_only)
        .await
    {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!("Failed to fetch news listing: {}", e);
            return;
        }
    };

    let fresh = {
        let mut ledger = ledger.lock().await;
        select_unseen(articles, &mut ledger, config.news_posts_per_update)
    };

    if fresh.is_empty() {
        tracing::debug!("News cycle complete; no unseen articles");
        return;
    }

    // Resolve the channel up front; if it is gone the whole cycle is dropped
    // rather than retried per item.
    let channel_id = match resolve_news_channel(http, config.news_channel_id).await {
        Ok(channel_id) => channel_id,
        Err(e) => {
            tracing::error!("Aborting news cycle: {}", e);
            return;
        }
    };

    for article in &fresh {
        let embed = match article_embed(article) {
            Ok(embed) => embed,
            Err(e) => {
                tracing::error!("Failed to build embed for article {}: {}", article.id, e);
                continue;
            }
        };

        match channel_id
            .send_message(http, CreateMessage::new().embed(embed))
            .await
        {
            Ok(_) => {
                tracing::info!("Posted article {} ({})", article.id, article.title);
            }
            Err(e) => {
                tracing::error!("Failed to post article {}: {}", article.id, e);
            }
        }
    }
}

async fn resolve_news_channel(http: &Http, id: u64) -> Result<ChannelId, AppError> {
    let channel_id = ChannelId::new(id);

    http.get_channel(channel_id)
        .await
        .map_err(|e| AppError::NotFound(format!("News channel {id} could not be resolved: {e}")))?;

    Ok(channel_id)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            url: format!("https://news.example.com/{id}"),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            source_name: "Example Wire".to_string(),
            source_domain: "news.example.com".to_string(),
        }
    }

    fn articles(ids: &[&str]) -> Vec<Article> {
        ids.iter().map(|id| article(id)).collect()
    }

    #[test]
    fn accepts_unseen_in_upstream_order() {
        let mut ledger = SeenLedger::new(100);

        let fresh = select_unseen(articles(&["1", "2", "3"]), &mut ledger, 3);

        let ids: Vec<&str> = fresh.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn skips_already_seen_identifiers() {
        let mut ledger = SeenLedger::new(100);
        ledger.insert("2");

        let fresh = select_unseen(articles(&["1", "2", "3"]), &mut ledger, 3);

        let ids: Vec<&str> = fresh.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn caps_accepted_articles_and_defers_the_rest() {
        let mut ledger = SeenLedger::new(100);

        let fresh = select_unseen(articles(&["1", "2", "3", "4", "5"]), &mut ledger, 3);

        assert_eq!(fresh.len(), 3);
        // Items past the cap are deferred, not recorded as seen.
        assert_eq!(ledger.len(), 3);
        assert!(!ledger.contains("4"));
        assert!(!ledger.contains("5"));
    }

    #[test]
    fn second_cycle_posts_only_the_deferred_remainder() {
        let mut ledger = SeenLedger::new(100);
        let ids = ["1", "2", "3", "4", "5"];

        let first = select_unseen(articles(&ids), &mut ledger, 3);
        assert_eq!(first.len(), 3);
        assert_eq!(ledger.len(), 3);

        // Upstream returns the same five items again; only the two deferred
        // ones come through, none duplicated.
        let second = select_unseen(articles(&ids), &mut ledger, 3);
        let second_ids: Vec<&str> = second.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(second_ids, ["4", "5"]);
        assert_eq!(ledger.len(), 5);

        let third = select_unseen(articles(&ids), &mut ledger, 3);
        assert!(third.is_empty());
    }

    #[test]
    fn article_embed_carries_title_link_source_and_domain() {
        let embed = article_embed(&article("42")).unwrap();
        let json = serde_json::to_string(&embed).unwrap();

        assert!(json.contains("Article 42"), "embed was: {json}");
        assert!(json.contains("https://news.example.com/42"), "embed was: {json}");
        assert!(json.contains("Published by Example Wire"), "embed was: {json}");
        assert!(json.contains("news.example.com"), "embed was: {json}");
    }
}
