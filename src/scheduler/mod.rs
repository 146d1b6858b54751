//! Scheduled update cycles.
//!
//! Two independent timers drive the bot once the gateway session is up: a
//! fixed-interval job refreshing the presence with the current price, and a
//! cron job fetching and posting news. Both run once immediately at startup
//! before the recurring schedule takes over. The timers never wait on each
//! other; a slow tick can overlap the next one, which is tolerated since the
//! only shared mutable state is the ledger behind its mutex.

use std::sync::Arc;

use serenity::all::Context;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    api::ApiClient,
    config::Config,
    error::AppError,
    ledger::SeenLedger,
    service::{news, price},
};

/// Starts both update jobs.
///
/// Called from the `ready` handler with a clone of the event context, which
/// carries the shard messenger needed to set the presence and the HTTP client
/// needed to post messages.
///
/// # Arguments
/// - `ctx`: Discord context from the ready event
/// - `api`: Client for the news/price API
/// - `config`: Application configuration
/// - `ledger`: Shared seen-article ledger
pub async fn start_scheduler(
    ctx: Context,
    api: ApiClient,
    config: Arc<Config>,
    ledger: Arc<Mutex<SeenLedger>>,
) -> Result<(), AppError> {
    // Both cycles fire once immediately; the recurring schedule takes over
    // after that.
    price::run_presence_cycle(&ctx, &api, &config).await;
    news::run_news_cycle(&ctx.http, &api, &config, &ledger).await;

    let scheduler = JobScheduler::new().await?;

    // Clone resources for the price job
    let job_ctx = ctx.clone();
    let job_api = api.clone();
    let job_config = config.clone();

    let price_job = Job::new_repeated_async(config.price_update_interval, move |_uuid, _lock| {
        let ctx = job_ctx.clone();
        let api = job_api.clone();
        let config = job_config.clone();

        Box::pin(async move {
            price::run_presence_cycle(&ctx, &api, &config).await;
        })
    })?;

    scheduler.add(price_job).await?;

    // Clone resources for the news job
    let job_ctx = ctx.clone();
    let job_api = api.clone();
    let job_config = config.clone();
    let job_ledger = ledger.clone();

    let news_job = Job::new_async(config.news_cron.as_str(), move |_uuid, _lock| {
        let ctx = job_ctx.clone();
        let api = job_api.clone();
        let config = job_config.clone();
        let ledger = job_ledger.clone();

        Box::pin(async move {
            news::run_news_cycle(&ctx.http, &api, &config, &ledger).await;
        })
    })?;

    scheduler.add(news_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Update scheduler started (presence every {:?}, news on \"{}\")",
        config.price_update_interval,
        config.news_cron
    );

    Ok(())
}
