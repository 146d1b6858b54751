use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_API_BASE_URL: &str = "https://cryptopanic.com/api/v1";
const DEFAULT_CURRENCY: &str = "BTC";
const DEFAULT_COMMAND_PREFIX: &str = "!crypto";
const DEFAULT_NEWS_CRON: &str = "0 0 */2 * * *";

pub struct Config {
    pub discord_bot_token: String,
    /// Channel that receives the news embeds.
    pub news_channel_id: u64,

    pub api_token: String,
    pub api_base_url: String,

    /// Currency code sent to both API endpoints.
    pub currency: String,
    /// Restrict the news feed to posts the upstream flags as important.
    pub news_important_only: bool,
    /// Maximum articles posted per news cycle; unseen overflow waits for the next cycle.
    pub news_posts_per_update: usize,
    /// Capacity of the seen-article ledger.
    pub seen_capacity: usize,

    /// Interval between presence updates.
    pub price_update_interval: Duration,
    /// Cron pattern (with seconds field) for the news cycle.
    pub news_cron: String,

    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let price_update_minutes: u64 = parsed_or("PRICE_UPDATE_MINUTES", 5)?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            news_channel_id: parsed_required("NEWS_CHANNEL_ID")?,
            api_token: required("CRYPTO_API_TOKEN")?,
            api_base_url: or_default("CRYPTO_API_BASE_URL", DEFAULT_API_BASE_URL),
            currency: or_default("CURRENCY", DEFAULT_CURRENCY),
            news_important_only: parsed_or("NEWS_IMPORTANT_ONLY", true)?,
            news_posts_per_update: parsed_or("NEWS_POSTS_PER_UPDATE", 3)?,
            seen_capacity: parsed_or("SEEN_CAPACITY", 100)?,
            price_update_interval: Duration::from_secs(price_update_minutes * 60),
            news_cron: or_default("NEWS_CRON", DEFAULT_NEWS_CRON),
            command_prefix: or_default("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_required<T>(name: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    required(name)?
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parsed_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
