//! Market data fetching and price presentation.
//!
//! Everything user-visible about prices lives here: the USD text formatting,
//! the presence string shown next to the bot's name, and the embed used by the
//! `price` command. Fetch failures never propagate out of this module; callers
//! get an explicit "unavailable" outcome and skip dependent formatting.

use serenity::all::{ActivityData, Context, CreateEmbed};

use crate::{
    api::{ApiClient, Quote},
    config::Config,
};

/// Bitcoin orange, used for price embeds.
const PRICE_EMBED_COLOR: u32 = 0xf7931a;

/// Fetches the current quote, degrading every failure path to `None`.
///
/// Transport errors, decode errors, and empty result sets are logged and
/// collapsed into the same unavailable outcome.
pub async fn latest_quote(api: &ApiClient, currency: &str) -> Option<Quote> {
    match api.ticker(currency).await {
        Ok(Some(quote)) => Some(quote),
        Ok(None) => {
            tracing::warn!("No market data returned for {}", currency);
            None
        }
        Err(e) => {
            tracing::error!("Failed to fetch market data for {}: {}", currency, e);
            None
        }
    }
}

/// One presence update cycle: fetch the quote and set the watching activity.
///
/// Skipped with a logged diagnostic when market data is unavailable; the
/// previous presence stays in place until the next cycle succeeds.
pub async fn run_presence_cycle(ctx: &Context, api: &ApiClient, config: &Config) {
    match latest_quote(api, &config.currency).await {
        Some(quote) => {
            let text = presence_text(&quote);
            tracing::debug!("Updating presence to: {}", text);
            ctx.set_activity(Some(ActivityData::watching(text)));
        }
        None => {
            tracing::warn!("Skipping presence update; market data unavailable");
        }
    }
}

/// Short status string for the bot presence, e.g. `BTC $65,000.00`.
pub fn presence_text(quote: &Quote) -> String {
    format!("{} {}", quote.symbol, format_usd(quote.price_usd))
}

/// Builds the informational card for the `price` command.
pub fn quote_embed(quote: &Quote) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} Market Data", quote.symbol))
        .color(PRICE_EMBED_COLOR)
        .field("Price", format_usd(quote.price_usd), true)
        .field("24h Change", change_text(quote.percent_change_24h), true)
        .field("Market Cap", format_usd_whole(quote.market_cap_usd), true)
}

/// Formats an amount as USD with comma grouping and cents, e.g. `$65,000.00`.
pub fn format_usd(amount: f64) -> String {
    format!("${}", group_thousands(&format!("{amount:.2}")))
}

/// Formats an amount as USD rounded to whole dollars, e.g. `$1,200,000,000,000`.
pub fn format_usd_whole(amount: f64) -> String {
    format!("${}", group_thousands(&format!("{amount:.0}")))
}

/// 24h change with a directional marker: up-arrow iff the change is positive,
/// down-arrow otherwise, magnitude to two decimal places.
pub fn change_text(percent_change_24h: f64) -> String {
    let arrow = if percent_change_24h > 0.0 { "▲" } else { "▼" };
    format!("{} {:.2}%", arrow, percent_change_24h.abs())
}

/// Inserts comma thousands separators into an already-formatted decimal string.
fn group_thousands(formatted: &str) -> String {
    let (whole, frac) = match formatted.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (formatted, None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price_usd: f64, percent_change_24h: f64, market_cap_usd: f64) -> Quote {
        Quote {
            symbol: "BTC".to_string(),
            price_usd,
            percent_change_24h,
            market_cap_usd,
        }
    }

    #[test]
    fn formats_usd_with_grouping_and_cents() {
        assert_eq!(format_usd(65000.0), "$65,000.00");
        assert_eq!(format_usd(100.5), "$100.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn formats_whole_usd_rounded() {
        assert_eq!(format_usd_whole(1.2e12), "$1,200,000,000,000");
        assert_eq!(format_usd_whole(999.6), "$1,000");
    }

    #[test]
    fn change_text_marks_direction() {
        assert_eq!(change_text(2.5), "▲ 2.50%");
        assert_eq!(change_text(-1.5), "▼ 1.50%");
        // Zero change is not positive, so it gets the down-arrow.
        assert_eq!(change_text(0.0), "▼ 0.00%");
    }

    #[test]
    fn presence_text_contains_formatted_price() {
        let text = presence_text(&quote(100.5, 0.0, 0.0));
        assert!(text.contains("$100.50"), "presence text was: {text}");
        assert!(text.contains("BTC"));
    }

    #[test]
    fn quote_embed_shows_price_change_and_market_cap() {
        let embed = quote_embed(&quote(65000.0, -1.5, 1.2e12));
        let json = serde_json::to_string(&embed).unwrap();

        assert!(json.contains("$65,000"), "embed was: {json}");
        assert!(json.contains("▼ 1.50%"), "embed was: {json}");
        assert!(json.contains("$1,200,000,000,000"), "embed was: {json}");
    }
}
