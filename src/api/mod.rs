//! HTTP client for the external crypto news/price API.
//!
//! The API exposes two read-only GET endpoints, both authenticated with a
//! static token passed as a query parameter and both returning a JSON object
//! with a `results` array: `/posts/` for news articles and `/tickers/` for
//! market data. No retries are attempted here; the next scheduled cycle or the
//! next user command is the implicit retry mechanism.

mod model;
mod wire;

pub use model::{Article, Quote};

use crate::error::AppError;

/// Client for the news/price API.
///
/// Cheap to clone; the inner reqwest client is reference-counted. The base URL
/// is injectable so tests can point at a local mock server.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Fetches the news listing for a currency, in upstream order.
    ///
    /// The upstream ordering (assumed reverse-chronological or by relevance)
    /// is preserved; items are not re-sorted.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, a non-success HTTP status,
    /// or an unexpected response shape.
    pub async fn news_posts(
        &self,
        currency: &str,
        important_only: bool,
    ) -> Result<Vec<Article>, AppError> {
        let mut request = self
            .http
            .get(format!("{}/posts/", self.base_url))
            .query(&[
                ("auth_token", self.auth_token.as_str()),
                ("currencies", currency),
                ("kind", "news"),
            ]);

        if important_only {
            request = request.query(&[("filter", "important")]);
        }

        let envelope: wire::PostsEnvelope = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.results.into_iter().map(Article::from).collect())
    }

    /// Fetches market data for a currency.
    ///
    /// Returns `Ok(None)` when the endpoint responds successfully but with an
    /// empty `results` array; callers must treat that the same as a failed
    /// fetch and skip dependent formatting.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, a non-success HTTP status,
    /// or an unexpected response shape.
    pub async fn ticker(&self, currency: &str) -> Result<Option<Quote>, AppError> {
        let envelope: wire::TickerEnvelope = self
            .http
            .get(format!("{}/tickers/", self.base_url))
            .query(&[
                ("auth_token", self.auth_token.as_str()),
                ("currencies", currency),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.results.into_iter().next().map(Quote::from))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    use super::*;

    fn post_json(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Headline {id}"),
            "url": format!("https://news.example.com/{id}"),
            "published_at": "2024-05-01T12:00:00Z",
            "source": { "title": "Example Wire", "domain": "news.example.com" }
        })
    }

    #[tokio::test]
    async fn news_posts_decodes_the_results_envelope() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/posts/")
                .query_param("auth_token", "test-token")
                .query_param("currencies", "BTC")
                .query_param("kind", "news")
                .query_param("filter", "important");
            then.status(200)
                .json_body(json!({ "results": [post_json(1), post_json(2)] }));
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        let articles = client.news_posts("BTC", true).await.unwrap();

        mock.assert();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "1");
        assert_eq!(articles[0].title, "Headline 1");
        assert_eq!(articles[0].url, "https://news.example.com/1");
        assert_eq!(articles[0].source_name, "Example Wire");
        assert_eq!(articles[0].source_domain, "news.example.com");
    }

    #[tokio::test]
    async fn news_posts_omits_the_importance_filter_when_disabled() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/posts/")
                .query_param("kind", "news")
                .query_param_missing("filter");
            then.status(200).json_body(json!({ "results": [] }));
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        let articles = client.news_posts("BTC", false).await.unwrap();

        mock.assert();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn news_posts_surfaces_http_errors() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/posts/");
            then.status(500);
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        assert!(client.news_posts("BTC", true).await.is_err());
    }

    #[tokio::test]
    async fn news_posts_surfaces_decode_failures() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/posts/");
            then.status(200).body("not json at all");
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        assert!(client.news_posts("BTC", true).await.is_err());
    }

    #[tokio::test]
    async fn ticker_returns_the_first_result() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/tickers/")
                .query_param("auth_token", "test-token")
                .query_param("currencies", "BTC");
            then.status(200).json_body(json!({
                "results": [{
                    "symbol": "BTC",
                    "price_usd": 65000.0,
                    "percent_change_24h": -1.5,
                    "market_cap_usd": 1.2e12
                }]
            }));
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        let quote = client.ticker("BTC").await.unwrap().unwrap();

        mock.assert();
        assert_eq!(quote.symbol, "BTC");
        assert_eq!(quote.price_usd, 65000.0);
        assert_eq!(quote.percent_change_24h, -1.5);
        assert_eq!(quote.market_cap_usd, 1.2e12);
    }

    #[tokio::test]
    async fn ticker_maps_empty_results_to_none() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/tickers/");
            then.status(200).json_body(json!({ "results": [] }));
        });

        let client = ApiClient::new(server.base_url(), "test-token");
        assert!(client.ticker("BTC").await.unwrap().is_none());
    }
}
